// ============================================================
// Layer 1 — Pages
// ============================================================
// The application's two pages as an explicit enumeration fed
// through pure render functions. Which page is shown is a
// parameter, never ambient state, so rendering is trivially
// testable and there is no hidden mode flag to get stale.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use crate::domain::category::Language;
use crate::domain::forecast::ForecastReport;
use crate::domain::reading::PAST_DAYS;

/// The pages the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page: what the application is
    Main,
    /// Prediction page: how to submit readings
    Prediction,
}

/// Render a page's static text in the requested language.
pub fn render(page: Page, lang: Language) -> String {
    match (page, lang) {
        (Page::Main, Language::English) => "\
Predict PM2.5 in Central Jakarta

An application that predicts Central Jakarta's PM2.5 index
for the 7 days ahead, from the 7 most recent daily readings."
            .to_string(),

        (Page::Main, Language::Indonesian) => "\
Prediksi PM2.5 di Jakarta Pusat

Aplikasi untuk memprediksi indeks PM2.5 Jakarta Pusat
selama 7 hari ke depan, dari 7 pembacaan harian terakhir."
            .to_string(),

        (Page::Prediction, Language::English) => format!(
            "\
Predict PM2.5 in Central Jakarta

Follow these steps to use this application:
  1. Provide the PM2.5 index for the past {PAST_DAYS} days (not
     including today's index).
  2. Value no. 1 is the reading from {PAST_DAYS} days ago, value
     no. 2 from 6 days ago, ... value no. {PAST_DAYS} is yesterday's.
  3. Run `predict` with all {PAST_DAYS} values."
        ),

        (Page::Prediction, Language::Indonesian) => format!(
            "\
Prediksi PM2.5 di Jakarta Pusat

Ikuti langkah berikut untuk menggunakan aplikasi ini:
  1. Masukkan indeks PM2.5 untuk {PAST_DAYS} hari terakhir (tidak
     termasuk indeks hari ini).
  2. Nilai ke-1 adalah pembacaan {PAST_DAYS} hari yang lalu, nilai
     ke-2 dari 6 hari yang lalu, ... nilai ke-{PAST_DAYS} adalah kemarin.
  3. Jalankan `predict` dengan ketujuh nilai tersebut."
        ),
    }
}

/// Render the forecast table: one line per upcoming day with
/// the date, the predicted index, and its severity label.
pub fn render_report(report: &ForecastReport, lang: Language) -> String {
    let heading = match lang {
        Language::English => "Seven-day PM2.5 forecast:",
        Language::Indonesian => "Prakiraan PM2.5 tujuh hari:",
    };

    let mut out = String::from(heading);
    for day in report.days() {
        out.push_str(&format!(
            "\n  {}  {:>4}  {}",
            day.date.format("%Y-%m-%d"),
            day.value,
            day.category.label(lang),
        ));
    }
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_main_page_in_both_languages() {
        assert!(render(Page::Main, Language::English).contains("Central Jakarta"));
        assert!(render(Page::Main, Language::Indonesian).contains("Jakarta Pusat"));
    }

    #[test]
    fn test_prediction_page_lists_the_steps() {
        let text = render(Page::Prediction, Language::English);
        assert!(text.contains("past 7 days"));
        assert!(text.contains("predict"));
    }

    #[test]
    fn test_report_has_one_line_per_day() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let report = ForecastReport::from_values(
            start,
            &[40.0, 60.0, 120.0, 250.0, 400.0, 600.0, 30.0],
        );
        let text = render_report(&report, Language::English);

        assert_eq!(text.lines().count(), 8); // heading + 7 days
        assert!(text.contains("2026-08-06"));
        assert!(text.contains("Good"));
        assert!(text.contains("Out of range"));
    }

    #[test]
    fn test_report_uses_indonesian_labels() {
        let start = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let report = ForecastReport::from_values(start, &[40.0; 7]);
        let text = render_report(&report, Language::Indonesian);
        assert!(text.contains("Prakiraan"));
        assert!(text.contains("Baik"));
    }
}
