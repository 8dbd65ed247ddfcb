//! Crosshair - console command generator with PNG previews and share links

use std::process::ExitCode;

use crosshair_config::{FileStore, MemoryStore, SettingsStore, PRESETS};
use crosshair_console::console_command;
use crosshair_frontend_core::Session;
use crosshair_ipc::CoreToUi;
use crosshair_render::CpuSurface;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod error;

use config::{EnvConfig, Invocation, RunArgs, DEFAULT_LOG_FILTER, USAGE};
use error::AppError;

fn main() -> ExitCode {
    // Parse configuration from environment
    let env = EnvConfig::from_env();
    init_tracing(&env.log_filter);

    match run(&env, std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            if matches!(e, AppError::Usage(_)) {
                eprintln!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(env: &EnvConfig, args: impl Iterator<Item = String>) -> Result<(), AppError> {
    let args = match config::parse_args(args)? {
        Invocation::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        Invocation::ListPresets => {
            for preset in PRESETS {
                println!("{:<12} {}", preset.id, console_command(&preset.config));
            }
            return Ok(());
        }
        Invocation::Run(args) => args,
    };

    if args.no_save {
        info!("Settings file disabled");
        return run_session(MemoryStore::new(), &args);
    }
    let path = args.store.clone().unwrap_or_else(|| env.store_path.clone());
    info!("Using settings file {}", path.display());
    run_session(FileStore::new(path), &args)
}

fn run_session<S: SettingsStore>(store: S, args: &RunArgs) -> Result<(), AppError> {
    let mut session = Session::new(store, args.query_string(), args.canvas);

    for msg in args.messages() {
        for reply in session.handle(msg) {
            if let CoreToUi::Error { code, message } = reply {
                return Err(AppError::Rejected { code, message });
            }
        }
    }

    let command = session.command();
    println!("{command}");

    if args.share {
        println!("?{}", session.share_query());
    }

    if let Some(path) = &args.cfg {
        std::fs::write(path, command.to_cfg()).map_err(|source| AppError::Write {
            path: path.clone(),
            source,
        })?;
        info!("Wrote {}", path.display());
    }

    if let Some(path) = &args.png {
        let mut surface = CpuSurface::new(args.canvas.width, args.canvas.height);
        session.present(&mut surface)?;
        surface.save_png(path)?;
    }

    Ok(())
}
