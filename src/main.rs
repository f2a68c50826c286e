use clap::Parser;
use tradecraft::cli::{check, output, rank, score, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Rank(args) => rank::execute(args).await,
        Commands::Score(args) => score::execute(args).await,
        Commands::CheckConfig(args) => check::execute_config(&args.config),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Fatal error");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
