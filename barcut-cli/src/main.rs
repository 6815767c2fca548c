use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{Context, Result};
use barcut::plan_jobs;
use barcut_cli::config::PlanConfig;
use barcut_cli::io;
use barcut_cli::io::cli::Cli;
use barcut_cli::io::output::PlanOutput;
use barcut_cli::io::svg_export::plan_to_svg;
use clap::Parser as ClapParser;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: PlanConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PlanConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed PlanConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let start = Instant::now();
    let (ext_instance, jobs) = io::read_instance(&args.input_file, &config)?;
    info!(
        "[MAIN] Read {} jobs with {} cuts from {}",
        jobs.len(),
        jobs.iter().map(|j| j.requirements.total_quantity()).sum::<usize>(),
        args.input_file.display()
    );

    let plans = plan_jobs(&jobs).context("planning failed, no plan was produced")?;

    for (description, plan) in &plans {
        let stock = plan.stock();
        println!(
            "{} (bar {}, unusable {}, kerf {}): {} bars",
            description,
            stock.bar_length(),
            stock.unusable_length(),
            stock.kerf_loss(),
            plan.n_bars()
        );
        for (i, summary) in plan.summaries().iter().enumerate() {
            println!("  bar {}: {}", i + 1, summary);
        }
    }

    {
        let output = PlanOutput {
            solution: barcut::io::export(&plans, start),
            instance: ext_instance,
            config: config.clone(),
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, &solution_path)?;
    }

    {
        for (i, (description, plan)) in plans.iter().enumerate() {
            let svg_path = args
                .solution_folder
                .join(format!("sol_{input_file_stem}_{i}.svg"));
            let svg = plan_to_svg(plan, config.svg_draw_options, description);

            io::write_svg(&svg, &svg_path)?;
        }
    }

    Ok(())
}
