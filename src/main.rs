//! Demo binary: resolve lookups against a directory of JSON locale tables
//! and print their bilingual form, the same way the in-process hook would.

use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser;

use dualsub::{
    FileCaptureLog, Interceptor, Locale, LocalizationStore, MemoryStore, Settings,
};

#[derive(Parser)]
#[command(name = "dualsub", about = "Pair localized game text with a second language")]
struct Cli {
    /// Directory of per-locale JSON tables (en.json, ru.json, ...)
    #[arg(long, default_value = "locales")]
    locales_dir: PathBuf,

    /// Settings file (JSON); built-in defaults apply when omitted
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Secondary language code, overriding the settings file
    #[arg(long)]
    secondary: Option<Locale>,

    /// Append captured pairs to this file
    #[arg(long)]
    capture_file: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Emit per-lookup debug traces
    #[arg(long)]
    verbose: bool,

    /// Lookups to run, as SHEET.KEY (e.g. Dialogue.HORNET_GREETING)
    #[arg(required = true)]
    lookups: Vec<String>,
}

fn init_logging(cli: &Cli) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    if let Some(path) = &cli.log_file {
        match std::fs::OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(file);
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .init();
                return Some(guard);
            }
            Err(err) => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .init();
                tracing::warn!(path = %path.display(), error = %err, "failed to open log file; using stderr");
                return None;
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    None
}

fn main() {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli);

    let mut settings = match &cli.settings {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::error!(%err, "failed to load settings");
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    if let Some(locale) = cli.secondary {
        settings.secondary_locale = locale;
    }
    if cli.verbose {
        settings.verbose = true;
    }
    if let Some(path) = &cli.capture_file {
        settings.capture_file = Some(path.clone());
    }

    let store = match MemoryStore::load_from_dir(&cli.locales_dir, Locale::En) {
        Ok(store) => Rc::new(store),
        Err(err) => {
            tracing::error!(dir = %cli.locales_dir.display(), %err, "failed to load locale tables");
            std::process::exit(1);
        }
    };

    let mut interceptor = Interceptor::new(store.clone(), &settings);
    if let Some(path) = &settings.capture_file {
        interceptor.add_sink(Rc::new(FileCaptureLog::new(
            path.clone(),
            settings.secondary_locale,
        )));
    }
    interceptor.arm();

    for lookup in &cli.lookups {
        let Some((sheet, key)) = lookup.split_once('.') else {
            tracing::warn!(lookup = %lookup, "expected SHEET.KEY, skipping");
            continue;
        };
        let mut result = match store.get(key, sheet) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(sheet, key, %err, "lookup failed");
                continue;
            }
        };
        interceptor.post_get(key, sheet, &mut result);
        println!("{}.{} = {}", sheet, key, result);
    }
}
