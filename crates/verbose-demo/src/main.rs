//! Demo program for verbose-core
//!
//! ```text
//! VERBOSE='*' verbose-demo
//! VERBOSE='greet' verbose-demo --backend log
//! ```

mod greet;

use clap::{Parser, ValueEnum};
use once_cell::sync::Lazy;
use verbose_core::{auto, vprintln, LogBackend, Logger, StreamBackend};

static LOGGER: Lazy<Logger> = Lazy::new(|| auto!());

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BackendKind {
    /// Colored names on stderr
    Stderr,
    /// Colored names on stdout
    Stdout,
    /// Records through env_logger
    Log,
}

#[derive(Parser, Debug)]
#[command(name = "verbose-demo", about = "Shows which loggers VERBOSE enables")]
struct Cli {
    /// Where enabled loggers write
    #[arg(long, value_enum, default_value_t = BackendKind::Log)]
    backend: BackendKind,

    /// Who to greet
    #[arg(default_value = "world")]
    name: String,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("verbose=info"))
        .init();

    match cli.backend {
        BackendKind::Stderr => verbose_core::set_backend(StreamBackend::stderr()),
        BackendKind::Stdout => verbose_core::set_backend(StreamBackend::stdout()),
        BackendKind::Log => verbose_core::set_backend(LogBackend::new()),
    }

    println!("Hello from main");
    vprintln!(LOGGER, "message to log from", LOGGER.name());

    let runtime = verbose_core::current_runtime();
    log::debug!(
        "VERBOSE={:?} root={:?}",
        runtime.spec(),
        runtime.root_directory()
    );

    greet::hello(&cli.name);
}
