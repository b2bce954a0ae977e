//! Runs a wing sizing study from a JSON configuration and writes the JSON report.
//!
//! Usage: sizing_study <config.json> [report.json]
//!
//! The report goes to stdout when no output path is given. Set `RUST_LOG` to change the log
//! level, which defaults to `info`.

use log::info;
use std::path::PathBuf;
use thinwall::Result;
use thinwall::sizing::{StudyConfig, run_study};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(config_path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: sizing_study <config.json> [report.json]");
        std::process::exit(2);
    };
    let output = args.next().map(PathBuf::from);

    let config = StudyConfig::load(&config_path)?;
    info!(
        "loaded {} with {} sections",
        config_path.display(),
        config.sections.len()
    );

    let report = run_study(&config)?;
    let text = serde_json::to_string_pretty(&report)?;

    match output {
        Some(path) => {
            std::fs::write(&path, text)?;
            info!("wrote report to {}", path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}
