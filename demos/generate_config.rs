//! Generate default engine configuration file
//!
//! Creates a JSON config with all default parameters

use huecraft::EngineConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/huecraft.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = EngineConfig::default();

    match config.to_json_file(output_path) {
        Ok(()) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!(
                "  Extraction: max side {}px, every {} pixel(s), buckets of {}, alpha >= {}",
                config.extraction.max_dimension,
                config.extraction.sample_stride,
                config.extraction.quantization_step,
                config.extraction.alpha_threshold
            );
            eprintln!(
                "  Export: {}x{}, labels {}",
                config.export.width, config.export.height, config.export.labels
            );
            eprintln!("  Store: {}", config.store.path.display());
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
