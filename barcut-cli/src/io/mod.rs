use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result, bail};
use barcut::entities::PartCuttingJob;
use barcut::io::ext_repr::ExtInstance;
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;

use crate::EPOCH;
use crate::config::PlanConfig;

pub mod cli;
pub mod output;
pub mod svg_export;
pub mod svg_util;
pub mod table;

/// Reads the input file and turns it into jobs.
/// JSON files are parsed as an [`ExtInstance`], `.csv`/`.xlsx` files as a table of part rows.
/// Tables are exported back into an [`ExtInstance`] so that every output carries its instance.
pub fn read_instance(
    path: &Path,
    config: &PlanConfig,
) -> Result<(ExtInstance, Vec<PartCuttingJob>)> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "json" => {
            let ext_instance = read_json_instance(path)?;
            let jobs = barcut::io::import(&ext_instance)
                .with_context(|| format!("invalid instance: {}", path.display()))?;
            if jobs.iter().all(|job| job.requirements.is_empty()) {
                return Err(table::TableError::EmptyTable.into());
            }
            Ok((ext_instance, jobs))
        }
        "csv" | "xlsx" => {
            let table = table::read_table(path)?;
            let jobs = table::table_to_jobs(&table, config)
                .with_context(|| format!("invalid table: {}", path.display()))?;
            let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("table");
            Ok((barcut::io::export_instance(name, &jobs), jobs))
        }
        _ => bail!(
            "unsupported input file {}, expected .json, .csv or .xlsx",
            path.display()
        ),
    }
}

pub fn read_json_instance(path: &Path) -> Result<ExtInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("[IO] solution written to file://{}", fs::canonicalize(path)?.to_str().unwrap_or("?"));
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to file://{}", fs::canonicalize(path)?.to_str().unwrap_or("?"));
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}
