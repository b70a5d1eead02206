use crate::cli::{Cli, Commands};
use kcoder::engine::{self, EntryOptions, HostPlatform, Queue, QueueEntry};
use kcoder::{config, ui};
use std::io;
use std::process;

pub fn run(cli: Cli) {
    // Handle subcommands first
    if let Some(command) = cli.command {
        match command {
            Commands::CheckFfmpeg => handle_check_ffmpeg(),
            Commands::DryRun { file, crf } => handle_dry_run(&file, crf),
            Commands::InitConfig => handle_init_config(),
        }
        return;
    }

    let config = config::Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {:#}", e);
        config::Config::default()
    });

    if config.logging.enabled {
        match config::Config::log_path() {
            Ok(path) => {
                if let Err(e) = engine::init_logging(&path, &config.logging.level) {
                    eprintln!("Warning: logging disabled: {:#}", e);
                }
            }
            Err(e) => eprintln!("Warning: logging disabled: {:#}", e),
        }
    }

    let directory = cli.directory.unwrap_or_else(|| {
        std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."))
    });

    let mut options = ui::SessionOptions::new(directory);
    options.clear_screen = config.startup.clear_screen && !cli.no_clear;
    options.dry_run = cli.dry_run;

    let queue = Queue::with_defaults(config.defaults.clone());
    let stdin = io::stdin();
    let mut session = ui::Session::new(queue, stdin.lock(), io::stdout(), options);

    if let Err(e) = session.run() {
        tracing::error!(error = %e, "session aborted");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn handle_check_ffmpeg() {
    match engine::ffmpeg_version() {
        Ok(version) => {
            println!("ffmpeg found: {}", version);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

fn handle_dry_run(file: &str, crf: u32) {
    let defaults = config::Config::load()
        .map(|c| c.defaults)
        .unwrap_or_default();
    let entry = QueueEntry::new(file, crf, EntryOptions::default(), &defaults);
    println!(
        "{}",
        engine::format_ffmpeg_cmd(&entry, HostPlatform::current())
    );
}

fn handle_init_config() {
    match config::Config::config_path() {
        Ok(path) if path.exists() => match config::Config::load_from(&path) {
            Ok(cfg) => {
                println!("Config loaded successfully from {}", path.display());
                println!("{:#?}", cfg);
            }
            Err(e) => {
                eprintln!("Config invalid: {:#}", e);
                process::exit(1);
            }
        },
        Ok(path) => {
            println!("Config missing, creating default config...");
            if let Err(e) = config::Config::default().save_to(&path) {
                eprintln!("Failed to save default config: {:#}", e);
                process::exit(1);
            }
            println!("Default config saved to {}", path.display());
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
