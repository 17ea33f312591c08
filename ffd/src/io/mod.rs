use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use svg::Document;
use zaagplan::io::ext_repr::ExtCutInstance;
use zaagplan::io::piece_list::parse_piece_list;

use crate::EPOCH;

pub mod cli;
pub mod output;
pub mod report;

/// Reads an instance: JSON, or a plain-text piece list for `.txt` and `.csv` files.
/// Piece lists carry no stock lengths.
pub fn read_instance(path: &Path) -> Result<ExtCutInstance> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match extension {
        "txt" | "csv" => read_piece_list(path),
        _ => {
            let file = File::open(path)
                .with_context(|| format!("could not open instance file: {}", path.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)
                .with_context(|| format!("could not parse instance file: {}", path.display()))
        }
    }
}

pub fn read_piece_list(path: &Path) -> Result<ExtCutInstance> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read piece list: {}", path.display()))?;
    let pieces = parse_piece_list(&text)
        .with_context(|| format!("invalid piece list: {}", path.display()))?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("pieces")
        .to_string();
    Ok(ExtCutInstance {
        name,
        pieces,
        stock_lengths: vec![],
    })
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!("[IO] solution written to file://{}", fs::canonicalize(path)?.display());
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to file://{}", fs::canonicalize(path)?.display());
    Ok(())
}

pub fn write_report(lines: &[String], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open report file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    info!("[IO] report written to file://{}", fs::canonicalize(path)?.display());
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
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
        // Add blanket level filter
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
