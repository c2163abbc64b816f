//! Console output utilities
//!
//! Plain-text rendering of wage series for the command-line explorer.
//! Missing values always render as `N/A`, never as zero.

use std::fmt::Write as _;

use crate::algorithm::growth::GrowthPoint;
use crate::collections::TableSummary;
use crate::models::{WageField, WageRecord};

/// Placeholder for a missing wage value
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a wage as whole dollars with thousands separators
#[must_use]
pub fn format_wage(value: Option<f64>) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };

    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a growth percentage with one decimal and an explicit sign
#[must_use]
pub fn format_growth(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |pct| format!("{pct:+.1}%"))
}

/// Render a year series as an aligned text table
///
/// `growth` is appended as a final column when given; it must have one point
/// per row in the same order.
#[must_use]
pub fn render_wage_table(rows: &[&WageRecord], growth: Option<&[GrowthPoint]>) -> String {
    let mut headers = vec!["Year".to_string()];
    headers.extend(WageField::ALL.iter().map(|f| f.label().to_string()));
    if growth.is_some() {
        headers.push("Median Growth".to_string());
    }

    let body: Vec<Vec<String>> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = vec![row.year.to_string()];
            cells.extend(row.wages().into_iter().map(format_wage));
            if let Some(points) = growth {
                cells.push(format_growth(points.get(i).and_then(|p| p.growth_pct)));
            }
            cells
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            body.iter()
                .map(|cells| cells[col].len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let render_line = |out: &mut String, cells: &[String]| {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:>width$}"))
            .collect::<Vec<_>>()
            .join(" | ");
        let _ = writeln!(out, "{line}");
    };

    render_line(&mut out, &headers);
    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");
    let _ = writeln!(out, "{rule}");
    for cells in &body {
        render_line(&mut out, cells);
    }
    out
}

/// Print a summary of the loaded table
pub fn print_summary(summary: &TableSummary) {
    println!("Loaded {} records", summary.records);
    println!(
        "Years: {}",
        summary
            .years
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Industries: {}", summary.industries);
    println!("Occupations: {}", summary.occupations);
}
