use crate::calendar::date_from_epoch_days;
use crate::schedule::ScheduleResult;
use crate::trip::TripLabels;
use chrono::{NaiveDate, NaiveDateTime};
use polars::prelude::{AnyValue, DataFrame, PolarsResult};

/// `Sat, Mar 2`
pub fn format_day_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// 24-hour `HH:MM`.
pub fn format_clock(at: NaiveDateTime) -> String {
    at.format("%H:%M").to_string()
}

fn cell_text(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::Date(days) => date_from_epoch_days(*days)
            .map(|d| d.to_string())
            .unwrap_or_default(),
        other => other.to_string(),
    }
}

pub fn render_df_as_text_table(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let col_names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();

    let mut cells: Vec<Vec<String>> = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        let row = columns
            .iter()
            .map(|col| {
                col.get(row_idx)
                    .map(|av| cell_text(&av))
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>();
        cells.push(row);
    }

    let mut widths: Vec<usize> = col_names.iter().map(|n| n.len()).collect();
    for row in &cells {
        for (ci, cell) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.len());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let render_row = |values: &[String]| {
        let mut line = String::from("|");
        for (ci, value) in values.iter().enumerate() {
            line.push(' ');
            line.push_str(value);
            line.push_str(&" ".repeat(widths[ci].saturating_sub(value.len())));
            line.push_str(" |");
        }
        line
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(&col_names));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &cells {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

/// Header lines followed by the day table.
pub fn render_plan(result: &ScheduleResult, labels: &TripLabels) -> PolarsResult<String> {
    let mut out = String::new();
    if let Some(route) = labels.route() {
        out.push_str(&format!("Trip               : {route}\n"));
    }
    out.push_str(&format!(
        "Time difference    : {}\n",
        result.difference_label()
    ));
    out.push_str(&format!(
        "Shift per day      : {:+.2}h\n",
        result.shift_per_day_hours
    ));
    out.push_str(&render_df_as_text_table(&result.to_dataframe()?));
    Ok(out)
}
