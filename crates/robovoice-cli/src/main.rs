//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Flag dispatch routes to handlers.

use clap::Parser;

use robovoice_cli::handlers::speak::SpeakArgs;
use robovoice_cli::{Cli, CliConfig, CliError, bootstrap, handlers, init_logging};

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);
    let ctx = bootstrap(config);

    if cli.check_deps {
        return handlers::check_deps::execute(ctx.probe.as_ref());
    }
    if cli.list_voices {
        return handlers::voices::execute(&ctx).await;
    }

    handlers::speak::execute(&ctx, SpeakArgs::from(&cli)).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables before parsing so .env can supply defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
