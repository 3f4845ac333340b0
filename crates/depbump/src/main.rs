use colored::Colorize;
use std::process;

fn main() {
    if let Err(e) = depbump_cli::main(std::env::args().collect::<Vec<String>>().as_slice()) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
