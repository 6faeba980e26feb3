// src/main.rs
use anyhow::Result;
use clap::Parser;
use std::io::Write;

use cstat::args::{Args, OutputFormat};
use cstat::config::Config;
use cstat::{engine, output};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_args(args);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut reports = Vec::new();
    for path in &config.paths {
        if config.format == OutputFormat::Table && config.paths.len() > 1 {
            writeln!(out, "==> {} <==", path.display())?;
        }

        match engine::process_file(path, &config, &mut out) {
            Ok(report) => reports.push(report),
            Err(e) => {
                if config.strict {
                    return Err(e.into());
                }
                eprintln!("Error: {e}");
            }
        }
    }

    output::emit(&reports, config.format, &mut out)?;

    Ok(())
}
