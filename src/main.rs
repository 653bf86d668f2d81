use clap::Parser;
use storefront_ui::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Cart(command) => cli::cart::run(cli.backend, command).await,
        Command::Check(command) => cli::check::run(cli.backend, command).await,
    }
}
