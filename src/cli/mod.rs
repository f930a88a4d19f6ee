pub mod commands;
pub mod parser;

pub use parser::{Cli, Commands};

use crate::config::Config;
use crate::utils::Result;

pub fn execute_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Local(args) => commands::local::execute(Config::load_or_default(), args),
        Commands::Remote(args) => commands::remote::execute(Config::load_or_default(), args),
        Commands::Completion(args) => commands::completion::execute(args),
    }
}
