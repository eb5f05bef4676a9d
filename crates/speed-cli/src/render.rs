//! Rendering sinks: comfy-table text and JSON.

use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use speed_model::{DashboardViews, SeriesView, Year};
use speed_views::{ViewSink, format_delta, format_speed};

use crate::config::OutputFormat;

/// Builds the sink for `format` writing to `out`.
pub fn sink_for(format: OutputFormat, out: Box<dyn Write>) -> Box<dyn ViewSink<Error = anyhow::Error>> {
    match format {
        OutputFormat::Table => Box::new(TableSink::new(out)),
        OutputFormat::Json => Box::new(JsonSink::new(out)),
    }
}

/// Writes each pass as one JSON document per line.
pub struct JsonSink<W> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ViewSink for JsonSink<W> {
    type Error = anyhow::Error;

    fn render(&mut self, views: &DashboardViews) -> Result<()> {
        serde_json::to_writer(&mut self.out, views).context("serialize views")?;
        writeln!(self.out).context("write views")?;
        self.out.flush().context("flush views")
    }
}

/// Writes each pass as a set of tables.
pub struct TableSink<W> {
    out: W,
}

impl<W: Write> TableSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn section(&mut self, title: &str, table: &Table) -> Result<()> {
        writeln!(self.out, "{title}").context("write views")?;
        writeln!(self.out, "{table}").context("write views")?;
        writeln!(self.out).context("write views")
    }
}

impl<W: Write> ViewSink for TableSink<W> {
    type Error = anyhow::Error;

    fn render(&mut self, views: &DashboardViews) -> Result<()> {
        let year = views.year;
        let region = &views.region;

        self.section(
            &format!("Top {} speeds, {year} ({region})", views.top_n),
            &ranked_table(&views.top_speeds, "Speed", |v| format_speed(Some(v))),
        )?;
        self.section(
            &format!("Most improved, {} ({region})", views.improvement),
            &ranked_table(&views.most_improved, "Change", format_delta),
        )?;
        self.section("Country trends", &trend_table(views))?;
        self.section(
            &format!("Digital inequality index, {year} ({region})"),
            &labelled_table(&views.inequality, "Region", "Max - min"),
        )?;
        self.section(
            &format!("Speed vs. improvement, {year} ({region})"),
            &scatter_table(views),
        )?;
        self.section(&format!("Regional totals ({region})"), &stacked_table(views))?;
        self.section(
            &format!("Speed distribution, {year} ({region})"),
            &distribution_table(views),
        )?;
        self.section(
            &format!("Global average ({region})"),
            &labelled_table(&views.global_average, "Year", "Average"),
        )?;
        self.out.flush().context("flush views")
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn new_table(headers: Vec<Cell>) -> Table {
    let mut table = Table::new();
    table.set_header(headers);
    apply_table_style(&mut table);
    table
}

fn ranked_table(view: &SeriesView, value_header: &str, format: impl Fn(f64) -> String) -> Table {
    let mut table = new_table(vec![
        header_cell("#"),
        header_cell("Country"),
        header_cell(value_header),
    ]);
    for (rank, (country, value)) in view.iter().enumerate() {
        table.add_row(vec![
            dim_cell(rank + 1),
            Cell::new(country),
            Cell::new(format(value)),
        ]);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

fn labelled_table(view: &SeriesView, label_header: &str, value_header: &str) -> Table {
    let mut table = new_table(vec![header_cell(label_header), header_cell(value_header)]);
    for (label, value) in view.iter() {
        table.add_row(vec![Cell::new(label), Cell::new(format_speed(Some(value)))]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

fn year_headers(first: &str) -> Vec<Cell> {
    std::iter::once(header_cell(first))
        .chain(Year::ALL.iter().map(|year| header_cell(&year.label())))
        .collect()
}

fn trend_table(views: &DashboardViews) -> Table {
    let mut table = new_table(year_headers("Country"));
    for line in &views.trend.lines {
        let mut row = vec![Cell::new(&line.country)];
        row.extend(line.values.iter().map(|value| match value {
            Some(v) => Cell::new(format!("{v:.2}")),
            None => dim_cell("-"),
        }));
        table.add_row(row);
    }
    table
}

fn scatter_table(views: &DashboardViews) -> Table {
    let mut table = new_table(vec![
        header_cell("Country"),
        header_cell("Speed"),
        header_cell("Improvement"),
    ]);
    for point in &views.correlation.points {
        table.add_row(vec![
            Cell::new(&point.label),
            Cell::new(format_speed(Some(point.x))),
            Cell::new(format_delta(point.y)),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

fn stacked_table(views: &DashboardViews) -> Table {
    let mut table = new_table(year_headers("Region"));
    let stacked = &views.region_stacked;
    for (idx, region) in stacked.labels.iter().enumerate() {
        let mut row = vec![Cell::new(region)];
        row.extend(
            stacked
                .series
                .iter()
                .map(|series| Cell::new(format!("{:.2}", series.values[idx]))),
        );
        table.add_row(row);
    }
    table
}

fn distribution_table(views: &DashboardViews) -> Table {
    let mut table = new_table(vec![header_cell("Mbps"), header_cell("Countries")]);
    let distribution = &views.distribution;
    for (label, count) in distribution.labels.iter().zip(&distribution.counts) {
        table.add_row(vec![Cell::new(label), Cell::new(count)]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use speed_model::{Dataset, FilterState, SpeedRecord};
    use speed_views::derive_views;

    fn views() -> DashboardViews {
        let dataset = Dataset::from_records(vec![
            SpeedRecord::new("Alpha", "R1", "")
                .with_value(Year::new(2023).unwrap(), 10.0)
                .with_value(Year::LATEST, 15.0),
            SpeedRecord::new("Beta", "R1", "").with_value(Year::LATEST, 18.0),
        ]);
        derive_views(&dataset, &FilterState::new().with_country("Alpha"))
    }

    #[test]
    fn test_json_sink_writes_one_line_per_pass() {
        let mut sink = JsonSink::new(Vec::new());
        sink.render(&views()).unwrap();
        sink.render(&views()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["year"], 2024);
        assert_eq!(value["top_speeds"]["labels"][0], "Beta");
    }

    #[test]
    fn test_table_sink_lists_sections() {
        let mut sink = TableSink::new(Vec::new());
        sink.render(&views()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();

        assert!(text.contains("Top 10 speeds, 2024 (All)"));
        assert!(text.contains("Most improved, 2023->2024 (All)"));
        assert!(text.contains("18.00 Mbps"));
        assert!(text.contains("+5.00 Mbps"));
        assert!(text.contains("Global average (All)"));
    }
}
