use clap::Parser;
use loxvm::cli::{Cli, repl, run_file};

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.file {
        Some(file_path) => run_file(&file_path),
        None => repl(),
    };

    std::process::exit(exit_code);
}
