//! Human-readable run report.

use std::time::Duration;

use restcheck_domain::RunSummary;

/// Prints one line per case in catalog order, followed by the tally.
pub fn print(summary: &RunSummary) {
    println!(
        "restcheck run {} (started {})",
        summary.run_id,
        summary.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    for report in &summary.reports {
        let line = match &report.detail {
            Some(detail) => format!(
                "{:<5} {} ({}) - {detail}",
                report.outcome.label().to_uppercase(),
                report.id,
                format_elapsed(report.elapsed)
            ),
            None => format!(
                "{:<5} {} ({})",
                report.outcome.label().to_uppercase(),
                report.id,
                format_elapsed(report.elapsed)
            ),
        };
        println!("{line}");
    }

    println!("{}", tally_line(summary));
}

/// Formats the run tally on one line.
fn tally_line(summary: &RunSummary) -> String {
    format!(
        "{} cases: {} passed, {} failed, {} expected failures, {} unexpected passes",
        summary.total(),
        summary.passed,
        summary.failed,
        summary.expected_failures,
        summary.unexpected_passes
    )
}

/// Formats an elapsed duration as milliseconds below a second, seconds above.
fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis < 1_000 {
        format!("{millis} ms")
    } else {
        format!("{:.2} s", elapsed.as_secs_f64())
    }
}
