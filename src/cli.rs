use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::blame::BlameArgs;
use crate::commands::config::ConfigCommands;
use crate::commands::resolve::ResolveArgs;
use crate::commands::walk::WalkArgs;

#[derive(Parser)]
#[command(
    name = "blamewalk",
    bin_name = "bw",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Annotate a file with git blame and print it
    Blame(BlameArgs),

    /// Annotate a file and walk its history interactively
    Walk(WalkArgs),

    /// Resolve a revision to its full commit id
    Resolve(ResolveArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
