use clap::Parser;
use hoard::cli::{Cli, Commands};
use hoard::config::Settings;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    let settings = match std::env::current_dir()
        .map_err(hoard::HoardError::from)
        .and_then(|cwd| Settings::load(&cwd))
    {
        Ok(settings) => settings,
        Err(e) => {
            hoard::cli::output::error(&e.to_string());
            std::process::exit(1);
        }
    };

    init_tracing(&cli, &settings);

    let result = match cli.command {
        Commands::Lock {
            ref input,
            ref out,
        } => hoard::cli::commands::lock::execute(&cli, &settings, input, out),
        Commands::Unlock { ref file, compact } => {
            hoard::cli::commands::unlock::execute(&cli, &settings, file, compact)
        }
        Commands::Check { ref file } => hoard::cli::commands::check::execute(file),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        hoard::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `--log-level`, which wins over config.
fn init_tracing(cli: &Cli, settings: &Settings) {
    let level = cli.log_level.as_deref().unwrap_or(&settings.log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false),
        )
        .init();
}
