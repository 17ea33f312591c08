use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use ffd::config::FFDConfig;
use ffd::io::cli::Cli;
use ffd::io::output::CutOutput;
use ffd::io::report::plan_report;
use ffd::opt::ffd::FFDOptimizer;
use ffd::io;
use log::{info, warn};
use zaagplan::io::svg::plan_to_svg;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFDConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    if let Some(clamp) = args.clamp {
        config.overhead.clamp_clearance = clamp;
    }
    if let Some(kerf) = args.kerf {
        config.overhead.kerf_loss = kerf;
    }

    info!("[MAIN] Successfully parsed FFDConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?
        .to_string();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let mut ext_instance = io::read_instance(&args.input_file)?;
    if let Some(stock_lengths) = args.stock_lengths {
        ext_instance.stock_lengths = stock_lengths;
    }
    if ext_instance.stock_lengths.is_empty() {
        warn!(
            "[MAIN] No stock lengths in {}, using defaults from config: {:?}",
            args.input_file.display(),
            config.default_stock_lengths
        );
        ext_instance.stock_lengths = config.default_stock_lengths.clone();
    }

    let instance = zaagplan::io::import(&ext_instance, config.overhead)?;

    let start = Instant::now();
    let plan = FFDOptimizer::new(instance).solve()?;
    let run_time_ms = start.elapsed().as_secs_f64() * 1000.0;

    let report = plan_report(&plan);
    for line in &report {
        info!("[PLAN] {line}");
    }

    let folder = args.solution_folder.as_path();
    io::write_report(&report, &folder.join(format!("sol_{input_stem}.txt")))?;

    {
        let svg = plan_to_svg(&plan, config.svg_draw_options, &ext_instance.name);
        io::write_svg(&svg, &folder.join(format!("sol_{input_stem}.svg")))?;
    }

    {
        let output = CutOutput {
            instance: ext_instance,
            plan: zaagplan::io::export(&plan),
            config,
            run_time_ms,
        };
        io::write_json(&output, &folder.join(format!("sol_{input_stem}.json")))?;
    }

    Ok(())
}
