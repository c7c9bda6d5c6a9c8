use clap::Parser;
use exchange_robot::cli::{self, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run(args) => cli::run::execute(args).await,
        Commands::Preview(arg) => cli::preview::execute(&arg.config).await,
        Commands::Check(CheckCommand::Config(arg)) => cli::check::execute_config(&arg.config),
    };

    if let Err(e) = result {
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
