use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use cartoonify::intake::process_upload;
use cartoonify::{AppConfig, CartoonParams};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Image files to cartoonify.
    inputs: Vec<PathBuf>,

    /// Path to a YAML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Report describing the configured home image, printed when the tool
/// is invoked with no inputs.
fn home_report(config: &AppConfig) -> serde_json::Value {
    if let Some(name) = &config.home_image {
        let path = config.result_dir.join(name);
        if path.is_file() {
            return serde_json::json!({
                "has_home_image": true,
                "home_image": path.display().to_string(),
            });
        }
        log::warn!("Configured home image not found: {:?}", path);
    }
    serde_json::json!({
        "has_home_image": false,
        "home_image": null,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::from_yaml_file(path)
            .with_context(|| format!("failed to load configuration from {:?}", path))?,
        None => AppConfig::default(),
    };
    let params = CartoonParams::default();

    if args.inputs.is_empty() {
        println!("{}", serde_json::to_string_pretty(&home_report(&config))?);
        return Ok(());
    }

    let mut failures = 0usize;
    for input in &args.inputs {
        match process_upload(input, &config, &params) {
            Ok(report) => println!("{}", serde_json::to_string_pretty(&report)?),
            Err(err) => {
                log::error!("Could not process {:?}: {}", input, err);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "status": "error",
                        "error": err.to_string(),
                    }))?
                );
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} inputs failed", failures, args.inputs.len());
    }
    Ok(())
}
