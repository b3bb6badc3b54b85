use clap::Parser;

use vitrine::cli::{self, Cli};
use vitrine::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_and_merge_config(&cli)?;
    cli::init_logger_from_settings(&settings)?;

    cli::execute_command(&cli, settings.clone()).await?;

    if cli::executor::should_start_server(&cli) {
        Server::new(settings).run().await?;
    }

    Ok(())
}
