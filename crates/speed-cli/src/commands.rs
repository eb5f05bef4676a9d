use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use comfy_table::{CellAlignment, Table};
use tracing::info_span;

use speed_cli::config::{OutputFormat, Settings};
use speed_cli::render::{apply_table_style, sink_for};
use speed_cli::session::{SESSION_HELP, run_session};
use speed_ingest::load_dataset_or_empty;
use speed_model::{Dataset, FilterState, RegionFilter};
use speed_views::Recomputer;

use crate::cli::{DataArgs, FilterArgs, OutputFormatArg, SessionArgs, ViewsArgs};

pub fn run_views(args: &ViewsArgs, settings: &Settings) -> Result<()> {
    let dataset = load(&args.data, settings);
    let filters = filters_from(&args.filters, settings);
    let format = output_format(args.format, settings);

    let out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        )),
        None => Box::new(io::stdout()),
    };
    let mut recomputer = Recomputer::new(Arc::new(dataset), sink_for(format, out));
    recomputer.on_filters_changed(&filters)?;
    if let Some(path) = &args.output {
        tracing::info!(path = %path.display(), "Wrote dashboard views");
    }
    Ok(())
}

pub fn run_countries(args: &DataArgs, settings: &Settings) -> Result<()> {
    let dataset = load(args, settings);
    let mut table = Table::new();
    table.set_header(vec!["Country", "Region", "Major area"]);
    apply_table_style(&mut table);
    for record in dataset.records() {
        table.add_row(vec![&record.country, &record.region, &record.major_area]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_regions(args: &DataArgs, settings: &Settings) -> Result<()> {
    let dataset = load(args, settings);
    let mut table = Table::new();
    table.set_header(vec!["Region", "Countries"]);
    apply_table_style(&mut table);
    for region in dataset.all_regions() {
        let count = dataset.by_region(&RegionFilter::parse(region)).len();
        table.add_row(vec![region.to_string(), count.to_string()]);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    println!("{table}");
    Ok(())
}

pub fn run_interactive(args: &SessionArgs, settings: &Settings) -> Result<()> {
    let dataset = load(&args.data, settings);
    let filters = filters_from(&args.filters, settings);
    let format = output_format(args.format, settings);

    let span = info_span!("session", countries = dataset.len());
    let _guard = span.enter();

    let mut feedback = io::stderr();
    writeln!(feedback, "{SESSION_HELP}").context("write feedback")?;
    let mut recomputer = Recomputer::new(Arc::new(dataset), sink_for(format, Box::new(io::stdout())));
    let final_filters = run_session(io::stdin().lock(), &mut recomputer, filters, &mut feedback)?;
    tracing::info!(
        passes = recomputer.passes(),
        region = %final_filters.region,
        countries = final_filters.countries.len(),
        "Session ended"
    );
    Ok(())
}

fn load(args: &DataArgs, settings: &Settings) -> Dataset {
    load_dataset_or_empty(&data_path(args, settings))
}

fn data_path(args: &DataArgs, settings: &Settings) -> PathBuf {
    args.data
        .clone()
        .unwrap_or_else(|| settings.data.path.clone())
}

/// Command-line filters layered over the configured defaults.
fn filters_from(args: &FilterArgs, settings: &Settings) -> FilterState {
    let mut filters = settings.base_filters();
    if let Some(region) = &args.region {
        filters.region = RegionFilter::parse(region);
    }
    if let Some(year) = args.year {
        filters.year = Some(year);
    }
    if let Some(top_n) = args.top_n {
        filters.top_n = Some(top_n);
    }
    if let Some(from) = args.improved_from {
        filters.improvement.from = from;
    }
    if let Some(to) = args.improved_to {
        filters.improvement.to = to;
    }
    for country in &args.countries {
        filters.select_country(country.as_str());
    }
    filters
}

fn output_format(arg: Option<OutputFormatArg>, settings: &Settings) -> OutputFormat {
    match arg {
        Some(OutputFormatArg::Table) => OutputFormat::Table,
        Some(OutputFormatArg::Json) => OutputFormat::Json,
        None => settings.output.format,
    }
}
