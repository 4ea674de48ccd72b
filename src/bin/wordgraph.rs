use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wordgraph::cli::{dispatch, Cli, Session};
use wordgraph::ingest::load_graph;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config().context("invalid configuration")?;
    let graph = load_graph(&cli.input)
        .with_context(|| format!("could not build a graph from {}", cli.input.display()))?;
    debug!(?config, "configuration resolved");

    let mut session = Session::new(graph, config);
    let stdout = std::io::stdout();
    dispatch::execute(&mut session, cli.command.as_ref(), &mut stdout.lock())?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
