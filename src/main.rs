use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding one subdirectory per theme, each with *.txt quiz files
    #[arg(short, long, default_value = "tests")]
    tests: PathBuf,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = textquiz::run(&args.tests) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
