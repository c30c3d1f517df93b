// src/report/chart.rs

//! Plain-text rendering of a `TensionReport` for terminals.

use super::TensionReport;
use crate::core::{HIGH_SEVERITY_THRESHOLD, MEDIUM_SEVERITY_THRESHOLD};
use std::fmt::Write;

const BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 14;
const FILLED: char = '█';
const SEVERITY_FILL: char = '░';

/// Number of cells out of `BAR_WIDTH` covered by `fraction`, clamped to the bar.
fn cells(fraction: f64) -> usize {
    let clamped = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
    (clamped * BAR_WIDTH as f64).round() as usize
}

fn bar(filled: usize, fill: char, rest: char) -> String {
    let mut row: String = std::iter::repeat_n(fill, filled).collect();
    row.extend(std::iter::repeat_n(rest, BAR_WIDTH - filled));
    row
}

/// Renders two panels: the entropy of both states side by side, and the
/// fidelity/severity split of the unit interval with the MEDIUM and HIGH
/// thresholds marked beneath it.
pub fn render_chart(report: &TensionReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_chart(&mut out, report);
    out
}

fn write_chart(out: &mut String, report: &TensionReport) -> std::fmt::Result {
    // One qubit carries at most one bit of entropy; widen if the estimator's bias overshoots
    let scale = report.entropy_expected.max(report.entropy_anomalous).max(1.0);

    writeln!(out, "--- Entropy Comparison ---")?;
    for (label, value) in [("Expected", report.entropy_expected), ("Anomalous", report.entropy_anomalous)] {
        writeln!(
            out,
            "{:<width$}|{}| {:.4}",
            label,
            bar(cells(value / scale), FILLED, ' '),
            value,
            width = LABEL_WIDTH
        )?;
    }

    writeln!(out)?;
    writeln!(out, "--- Anomaly Analysis ---")?;
    let fidelity_cells = cells(report.fidelity);
    writeln!(
        out,
        "{:<width$}|{}| fidelity {:.4} / severity {:.4}",
        "Quantum State",
        bar(fidelity_cells, FILLED, SEVERITY_FILL),
        report.fidelity,
        report.severity,
        width = LABEL_WIDTH
    )?;

    let mut markers = vec![' '; BAR_WIDTH + 1];
    markers[cells(MEDIUM_SEVERITY_THRESHOLD)] = 'M';
    markers[cells(HIGH_SEVERITY_THRESHOLD)] = 'H';
    let markers: String = markers.into_iter().collect();
    writeln!(out, "{:<width$}{}", "", markers.trim_end(), width = LABEL_WIDTH)?;
    writeln!(
        out,
        "{:<width$}{} fidelity  {} severity  M/H thresholds {:.1}/{:.1}  status {}",
        "",
        FILLED,
        SEVERITY_FILL,
        MEDIUM_SEVERITY_THRESHOLD,
        HIGH_SEVERITY_THRESHOLD,
        report.status,
        width = LABEL_WIDTH
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::sample_report;

    #[test]
    fn cells_clamp_out_of_range_values() {
        assert_eq!(cells(-0.5), 0);
        assert_eq!(cells(2.0), BAR_WIDTH);
        assert_eq!(cells(f64::NAN), 0);
        assert_eq!(cells(0.5), BAR_WIDTH / 2);
    }

    #[test]
    fn fidelity_bar_splits_at_fidelity() {
        let chart = render_chart(&sample_report(0.25));
        let row = chart
            .lines()
            .find(|line| line.starts_with("Quantum State"))
            .expect("analysis row present");
        assert_eq!(row.chars().filter(|c| *c == FILLED).count(), 10);
        assert_eq!(row.chars().filter(|c| *c == SEVERITY_FILL).count(), 30);
    }

    #[test]
    fn threshold_markers_sit_at_policy_positions() {
        let chart = render_chart(&sample_report(0.5));
        let marker_row = chart
            .lines()
            .find(|line| line.trim_start().starts_with('M'))
            .expect("marker row present");
        let body: Vec<char> = marker_row.chars().skip(LABEL_WIDTH).collect();
        assert_eq!(body[cells(MEDIUM_SEVERITY_THRESHOLD)], 'M');
        assert_eq!(body[cells(HIGH_SEVERITY_THRESHOLD)], 'H');
    }

    #[test]
    fn entropy_rows_scale_to_one_bit() {
        let chart = render_chart(&sample_report(0.5));
        let expected = chart.lines().find(|l| l.starts_with("Expected")).unwrap();
        let anomalous = chart.lines().find(|l| l.starts_with("Anomalous")).unwrap();
        assert_eq!(expected.chars().filter(|c| *c == FILLED).count(), BAR_WIDTH);
        assert_eq!(anomalous.chars().filter(|c| *c == FILLED).count(), 0);
    }
}
