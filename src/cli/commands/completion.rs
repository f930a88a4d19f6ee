use crate::cli::parser::{Cli, CompletionArgs};
use crate::utils::Result;
use clap::CommandFactory;
use clap_complete::generate;

pub fn execute(args: CompletionArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "shear", &mut std::io::stdout());
    Ok(())
}
