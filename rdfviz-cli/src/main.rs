use clap::Parser;
use rdfviz_cli::cli::Cli;
use rdfviz_cli::error::exit_with_error;
use rdfviz_cli::RunOutcome;

fn init_tracing(cli: &Cli) {
    // --quiet always silences logs; --verbose shows info (or RUST_LOG when set).
    // Without either flag logs stay off so stderr only carries errors.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    match rdfviz_cli::execute(&cli) {
        Ok(RunOutcome::NoInput { path }) => {
            tracing::info!(path = %path.display(), "no input, no images written");
        }
        Ok(RunOutcome::Rendered {
            files,
            nodes,
            edges,
        }) => {
            tracing::info!(nodes, edges, files = files.len(), "done");
        }
        Err(e) => exit_with_error(e),
    }
}
