use clap::Parser;
use media_tool::{
    commands::{self, Commands},
    config::Config,
    output,
};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = match Config::new() {
        Ok(config) => config,
        Err(err) => return report_error(&err, cli.json),
    };

    init_tracing(&config);
    match &config.source {
        Some(path) => info!("Loaded configuration from {:?}", path),
        None => info!("No config file found, using built-in defaults"),
    }
    debug!("Running {:?}", cli.command);

    match commands::run(cli.command, &config) {
        Ok(result) => {
            println!("{}", result.render(cli.json)?);
            Ok(if result.rejected {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Err(err) => report_error(&err, cli.json),
    }
}

fn report_error(err: &anyhow::Error, json: bool) -> anyhow::Result<ExitCode> {
    let rendered = output::render_error(err, json)?;
    if json {
        println!("{}", rendered);
    } else {
        eprintln!("{}", rendered);
    }
    Ok(ExitCode::FAILURE)
}
