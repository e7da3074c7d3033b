//! Plain-text rendering of claim statistics and simulation summaries.

use std::fmt::Write;

use revsim_core::{ClaimStats, ProbabilityMap, SimulationSummary};

use crate::util::format::{format_currency, format_currency_short, format_percentage};

/// Width of the longest histogram bar, in characters
const BAR_WIDTH: usize = 40;

pub fn render_stats(stats: &ClaimStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total billing amount: {}", format_currency(stats.total_amount));
    let _ = writeln!(out, "Total claims:         {}", stats.total_claims);

    for ((status, count), (_, amount)) in stats.status_counts.iter().zip(&stats.amount_by_status) {
        let share = if stats.total_amount > 0.0 {
            amount / stats.total_amount
        } else {
            0.0
        };
        let _ = writeln!(
            out,
            "  {:<10} {:>4} claims  {:>14}  {:>4}",
            status.label(),
            count,
            format_currency(*amount),
            format_percentage(share)
        );
    }
    out
}

pub fn render_probabilities(probabilities: &ProbabilityMap) -> String {
    let mut out = String::from("Payment probabilities:\n");
    for (status, probability) in probabilities.iter() {
        let _ = writeln!(
            out,
            "  {:<10} {:>4}",
            status.label(),
            format_percentage(probability)
        );
    }
    out
}

pub fn render_summary(summary: &SimulationSummary) -> String {
    let mut out = String::new();
    let p = &summary.percentiles;

    let _ = writeln!(out, "Simulation results ({} iterations):", summary.iterations);
    let _ = writeln!(
        out,
        "  Expected revenue: {}",
        format_currency_short(summary.expected_revenue)
    );
    let _ = writeln!(
        out,
        "  Range:            {} - {}",
        format_currency_short(summary.min_revenue),
        format_currency_short(summary.max_revenue)
    );
    let _ = writeln!(
        out,
        "  P25 / P50 / P75:  {} / {} / {}",
        format_currency_short(p.p25),
        format_currency_short(p.p50),
        format_currency_short(p.p75)
    );
    let _ = writeln!(out, "  P95:              {}", format_currency_short(p.p95));

    out.push_str("\nRevenue distribution:\n");
    let peak = summary
        .distribution
        .iter()
        .map(|b| b.count)
        .max()
        .unwrap_or(0);
    for (revenue, count) in summary.chart_points() {
        let width = if peak > 0 {
            (count * BAR_WIDTH).div_ceil(peak)
        } else {
            0
        };
        let _ = writeln!(
            out,
            "  {:>12} | {:<bar$} {}",
            format_currency_short(revenue as f64),
            "#".repeat(width),
            count,
            bar = BAR_WIDTH
        );
    }
    out
}
