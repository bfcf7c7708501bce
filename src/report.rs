//! Plain-text export of a finished calculation.

use std::fmt;

use chrono::NaiveDateTime;

use crate::session::Calculation;

pub const REPORT_FILE_NAME: &str = "lumenator-report.txt";

const RULE: &str = "-------------------------------------";

/// Writes the report for `calc` into `out`.
pub fn write_report<W: fmt::Write>(
    out: &mut W,
    calc: &Calculation,
    currency: &str,
    generated_at: NaiveDateTime,
) -> fmt::Result {
    let input = &calc.input;
    let result = &calc.result;
    let unit = input.unit.label();
    let (length, width) = input.dimension_text();

    writeln!(out, "Lumenator Lighting Calculation Report")?;
    writeln!(out, "=====================================")?;
    writeln!(out)?;
    writeln!(out, "ROOM SPECIFICATIONS:")?;
    if input.is_custom() {
        writeln!(out, "- Room Type: Custom ({:.0} Lux)", result.required_lux)?;
    } else {
        writeln!(out, "- Room Type: {}", input.room_type)?;
    }
    writeln!(out, "- Dimensions: {length} {unit} x {width} {unit}")?;
    writeln!(
        out,
        "- Area: {:.2} sq ft ({:.2} sq m)",
        result.area_sq_ft, result.area_sq_m
    )?;
    writeln!(out)?;
    writeln!(out, "CALCULATION:")?;
    writeln!(out, "- Required Brightness: {:.0} Lux", result.required_lux)?;
    writeln!(out, "- Total Required Lumens: {} lumens", result.total_lumens)?;
    writeln!(out)?;
    writeln!(out, "LIGHTING SUGGESTIONS:")?;
    writeln!(out, "{RULE}")?;

    for (i, s) in calc.suggestions.iter().enumerate() {
        writeln!(out)?;
        if i == 0 {
            writeln!(out, "Option {}: {} (Best Value)", i + 1, s.fixture.name)?;
        } else {
            writeln!(out, "Option {}: {}", i + 1, s.fixture.name)?;
        }
        writeln!(out, "- Quantity Needed: {}", s.quantity)?;
        writeln!(out, "- Total Lumens Provided: {}", s.total_lumens)?;
        writeln!(out, "- Estimated Cost: {currency}{:.2}", s.total_cost)?;
        writeln!(out, "{RULE}")?;
    }

    write!(
        out,
        "Report generated on: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    )
}

pub fn render(calc: &Calculation, currency: &str, generated_at: NaiveDateTime) -> String {
    let mut out = String::new();
    // fmt::Write for String never returns an error.
    write_report(&mut out, calc, currency, generated_at).ok();
    out
}
