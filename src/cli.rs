//! Command-line entry points. Exit codes follow the conventions of the
//! reference interpreter: 0 success, 1 compile error, 2 runtime error, 84
//! usage error (can't read the file).
use std::io::{self, Write};

use clap::Parser;

use crate::{compiler::compile, vm::VM};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(value_name = "FILE")]
    pub file: Option<String>,
}

/// Runs a `.lox` file to completion and returns the process exit code.
pub fn run_file(path: &str) -> i32 {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Could not read file '{path}': {e}");
            return 84;
        }
    };

    run_source(&source, io::stdout())
}

fn run_source(source: &str, writer: impl Write) -> i32 {
    let chunk = match compile(source) {
        Ok(chunk) => chunk,
        Err(errors) => {
            for error in &errors {
                eprintln!("{error}");
            }
            return 1;
        }
    };

    let mut vm = VM::with_writer(chunk, writer);
    match vm.run() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{e}");
            2
        }
    }
}

/// Starts an interactive read-eval-print loop. Each line is compiled as its
/// own chunk, but globals persist across lines since they live on the VM.
pub fn repl() -> i32 {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    let mut vm = VM::new(crate::chunk::Chunk::new());

    loop {
        print!("> ");
        if let Err(e) = stdout.flush() {
            eprintln!("Error flushing stdout: {e}");
            break;
        }

        match stdin.read_line(&mut line) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {
                let source = line.trim_end();
                if source.is_empty() {
                    line.clear();
                    continue;
                }
                if source == "exit" {
                    break;
                }

                match compile(source) {
                    Ok(chunk) => {
                        vm.load(chunk);
                        if let Err(e) = vm.run() {
                            println!("{e}");
                        }
                    }
                    Err(errors) => {
                        for error in &errors {
                            println!("{error}");
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!("Error reading line: {e}");
                break;
            }
        }

        line.clear();
    }

    0
}

#[cfg(test)]
mod tests {
    use super::run_source;

    #[test]
    fn successful_run_returns_exit_code_zero() {
        assert_eq!(run_source("print 1;", Vec::new()), 0);
    }

    #[test]
    fn compile_error_returns_exit_code_one() {
        assert_eq!(run_source("print ;", Vec::new()), 1);
    }

    #[test]
    fn runtime_error_returns_exit_code_two() {
        assert_eq!(run_source("print undefined_var;", Vec::new()), 2);
    }
}
