use clap::Parser;
use shear::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute_command(cli) {
        eprintln!("shear: {}", e);
        std::process::exit(1);
    }
}
