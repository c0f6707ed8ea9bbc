use burn::{
    nn::{Dropout, DropoutConfig, Linear, LinearConfig, Lstm, LstmConfig},
    prelude::*,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct Pm25ForecastConfig {
    pub num_features: usize,
    pub d_hidden:     usize,
    pub num_layers:   usize,
    pub horizon:      usize,
    pub dropout:      f64,
}

impl Pm25ForecastConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> Pm25ForecastModel<B> {
        // First layer reads the raw feature width, the rest read
        // the hidden width of the layer below.
        let layers: Vec<Lstm<B>> = (0..self.num_layers)
            .map(|i| {
                let d_input = if i == 0 { self.num_features } else { self.d_hidden };
                LstmConfig::new(d_input, self.d_hidden, true).init(device)
            })
            .collect();
        let head    = LinearConfig::new(self.d_hidden, self.horizon).init(device);
        let dropout = DropoutConfig::new(self.dropout).init();
        Pm25ForecastModel { layers, head, dropout }
    }
}

#[derive(Module, Debug)]
pub struct Pm25ForecastModel<B: Backend> {
    pub layers:  Vec<Lstm<B>>,
    pub head:    Linear<B>,
    pub dropout: Dropout,
}

impl<B: Backend> Pm25ForecastModel<B> {
    /// window: [batch, past_days, num_features] → forecasts: [batch, horizon]
    pub fn forward(&self, window: Tensor<B, 3>) -> Tensor<B, 2> {
        let [batch_size, seq_len, _] = window.dims();

        // Each LSTM layer emits its hidden state at every timestep;
        // the next layer consumes that full sequence.
        let mut x = window;
        for lstm in &self.layers {
            let (hidden_seq, _state) = lstm.forward(x, None);
            x = self.dropout.forward(hidden_seq);
        }

        // Only the final timestep's hidden state summarises the
        // whole window — slice it out and project to the horizon.
        let [_, _, d_hidden] = x.dims();
        let last = x
            .slice([0..batch_size, seq_len - 1..seq_len, 0..d_hidden])
            .reshape([batch_size, d_hidden]);

        self.head.forward(last) // [batch, horizon]
    }
}
