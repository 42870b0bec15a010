use clap::Parser;

use asciify::cli::Args;
use asciify::config::Config;
use asciify::{pipeline, RenderOptions};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    // Load config file
    // If --config is specified, require the file to exist
    // Otherwise, fall back to defaults if default config not found
    let config = if let Some(ref path) = args.config {
        match Config::load_from_explicit(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match Config::load() {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Failed to load config file: {}", e);
                log::warn!("Using default settings");
                Config::default()
            }
        }
    };

    let options = RenderOptions::resolve(&args, &config);
    log::debug!("Resolved options: {:?}", options);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = pipeline::run(&args.file, &options, &mut out) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
