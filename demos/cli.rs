//! Command-line interface for huecraft
//!
//! Basic CLI tool for generating, extracting, saving and exporting palettes

use huecraft::export::export_png;
use huecraft::{
    extract_palette_from_image, generate_color_by_name, generate_mood_color,
    generate_palette_by_name, EngineConfig, GeneratedPalette, PaletteError, PaletteSession,
    PaletteStore, RandomSource, RngSource,
};
use std::{
    env,
    path::{Path, PathBuf},
    process,
};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Options {
    command: Option<String>,
    operand: Option<String>,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    save: bool,
    export_dir: Option<PathBuf>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();

    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    let config = match &options.config_path {
        Some(path) => match EngineConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };

    let result = match options.seed {
        Some(seed) => run(&options, &config, &mut RngSource::seeded(seed)),
        None => run(&options, &config, &mut RngSource::thread()),
    };

    if let Err(error) = result {
        eprintln!("Error: {}", error);
        if error.is_recoverable() {
            eprintln!("Suggestion: {}", error.user_message());
        }
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "--seed" | "--export" => {
                let Some(value) = args.get(i + 1) else {
                    eprintln!("Missing value for {}", args[i]);
                    process::exit(1);
                };
                match args[i].as_str() {
                    "--config" => options.config_path = Some(PathBuf::from(value)),
                    "--export" => options.export_dir = Some(PathBuf::from(value)),
                    _ => match value.parse() {
                        Ok(seed) => options.seed = Some(seed),
                        Err(_) => {
                            eprintln!("Invalid seed: {}", value);
                            process::exit(1);
                        }
                    },
                }
                i += 1;
            }
            "--save" => options.save = true,
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if options.command.is_none() {
                    options.command = Some(arg.to_string());
                } else if options.operand.is_none() {
                    options.operand = Some(arg.to_string());
                } else {
                    eprintln!("Error: Unexpected argument '{}'", arg);
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    if options.command.is_none() {
        print_help(&args[0]);
        process::exit(1);
    }
    options
}

fn run(
    options: &Options,
    config: &EngineConfig,
    rng: &mut impl RandomSource,
) -> Result<(), PaletteError> {
    let operand = options.operand.as_deref();

    match options.command.as_deref().unwrap_or_default() {
        "generate" => {
            let generated = match operand {
                Some(name) => generate_palette_by_name(name, rng),
                None => huecraft::generate_harmony_palette(None, rng),
            };
            print_generated(&generated);
            finish(options, config, &generated.palette)
        }
        "extract" => {
            let Some(image) = operand else {
                eprintln!("Usage: extract <image_path>");
                process::exit(1);
            };
            let colors = extract_palette_from_image(Path::new(image), &config.extraction)?;
            if colors.is_empty() {
                eprintln!("No opaque pixels found; using a random color");
            }
            let mut session = PaletteSession::new();
            session.apply_extracted(&colors, rng);
            print_hexes(session.palette().to_hex_vec());
            finish(options, config, session.palette())
        }
        "mood" => {
            let color = match operand {
                Some(name) => generate_color_by_name(name, rng),
                None => generate_mood_color(None, rng),
            };
            println!("{}", color);
            Ok(())
        }
        "contrast" => {
            let Some(hex) = operand else {
                eprintln!("Usage: contrast <#RRGGBB>");
                process::exit(1);
            };
            println!("{}", huecraft::color::contrast_color(hex)?);
            Ok(())
        }
        "list" => {
            let store = PaletteStore::open(&config.store.path);
            if store.is_empty() {
                eprintln!("No saved palettes yet. Generate and save your first palette!");
            }
            for saved in store.list() {
                let hexes: Vec<String> = saved.colors.iter().map(|c| c.to_hex()).collect();
                println!("{}  {}  {}", saved.id, saved.date, hexes.join(" "));
            }
            Ok(())
        }
        "delete" => {
            let id = operand.and_then(|s| s.parse::<i64>().ok()).unwrap_or_else(|| {
                eprintln!("Usage: delete <palette_id>");
                process::exit(1);
            });
            let mut store = PaletteStore::open(&config.store.path);
            if store.delete(id)? {
                eprintln!("Deleted palette {}", id);
            } else {
                eprintln!("No palette with id {}", id);
            }
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Use --help for usage information");
            process::exit(1);
        }
    }
}

/// Apply --save and --export to the final palette
fn finish(
    options: &Options,
    config: &EngineConfig,
    palette: &huecraft::Palette,
) -> Result<(), PaletteError> {
    if options.save {
        let mut store = PaletteStore::open(&config.store.path);
        let saved = store.save(palette)?;
        eprintln!("Saved palette {} to {}", saved.id, store.path().display());
    }
    if let Some(dir) = &options.export_dir {
        let path = export_png(palette, dir, &config.export)?;
        eprintln!("Exported {}", path.display());
    }
    Ok(())
}

fn print_generated(generated: &GeneratedPalette) {
    eprintln!("{}", generated.display_name());
    print_hexes(generated.palette.to_hex_vec());
}

fn print_hexes(hexes: Vec<String>) {
    match serde_json::to_string(&hexes) {
        Ok(json) => println!("{}", json),
        Err(_) => println!("{}", hexes.join(" ")),
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <command> [operand]", program_name);
    eprintln!();
    eprintln!("Generate five-color palettes.");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  generate [SCHEME]   Harmony palette (random scheme if omitted)");
    eprintln!("  extract <IMAGE>     Dominant colors of an image");
    eprintln!("  mood [MOOD]         One color in a mood (random mood if omitted)");
    eprintln!("  contrast <HEX>      Readable text color for a background");
    eprintln!("  list                Show saved palettes");
    eprintln!("  delete <ID>         Delete a saved palette");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <FILE>     JSON engine configuration");
    eprintln!("  --seed <N>          Reproducible randomness");
    eprintln!("  --save              Save the resulting palette");
    eprintln!("  --export <DIR>      Export the resulting palette as PNG");
    eprintln!("  --help, -h          Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} generate triadic --seed 42", program_name);
    eprintln!("  {} extract photo.jpg --save --export out/", program_name);
}
