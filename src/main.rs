mod cli;
mod commands;
mod editor;
mod nav;
mod shared;
mod shell;
mod term;


use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Cli { command } = Cli::parse();

    match command {
        Commands::Blame(args) => commands::blame::run(&args)?,
        Commands::Walk(args) => commands::walk::run(&args)?,
        Commands::Resolve(args) => commands::resolve::run(&args)?,
        Commands::Config(config_cmd) => config_cmd.run()?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "bw", &mut std::io::stdout());
        }
    }

    Ok(())
}
