use color_eyre::Result;

use marklee::cli::{parse_args, run_cli_command};
use marklee::server;
use marklee::startup::{init_logging, ServerConfig};

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(command) {
        return result;
    }

    init_logging();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        admin = %config.admin_email,
        "Starting Marklee"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::serve(config))
}
