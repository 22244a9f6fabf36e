use clap::Parser;

use waitgate::observability::init_logging;
use waitgate::WaitConfig;

/// Print a status line, block until interrupted, then exit cleanly.
///
/// Arguments are accepted and ignored; stdout only ever carries the status lines.
#[derive(Parser, Debug)]
#[command(
    name = "waitgate",
    disable_help_flag = true,
    disable_version_flag = true,
    ignore_errors = true
)]
struct Cli {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _ignored: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _cli = Cli::parse();

    // No file or environment is consulted for behavior; defaults are the program.
    let config = WaitConfig::default();
    init_logging(&config.observability);

    tracing::info!("waitgate v{} starting", env!("CARGO_PKG_VERSION"));

    let stdout = std::io::stdout();
    let outcome = waitgate::run(config, stdout.lock()).await?;

    tracing::info!(outcome = ?outcome, "Shutdown complete");
    std::process::exit(outcome.exit_code());
}
