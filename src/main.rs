use std::{env, fs};

use calcnote::{Environment, LineType, process_document};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

/// calcnote finds the calculations in a plain-text document and evaluates
/// them, carrying variables from line to line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells calcnote to read a file instead of taking the text directly.
    #[arg(short, long)]
    file: bool,

    /// Only print each line's classification.
    #[arg(short, long)]
    classify: bool,

    /// Raises the log level. Repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

/// Log filter used when neither `CALCNOTE_LOG` nor `RUST_LOG` is set.
fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "calcnote=debug",
        _ => "calcnote=trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = env::var("CALCNOTE_LOG").ok()
                                         .or_else(|| env::var("RUST_LOG").ok())
                                         .filter(|_| verbose == 0)
                                         .map_or_else(|| EnvFilter::new(default_filter(verbose)),
                                                      EnvFilter::new);

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let text = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.replace("\\n", "\n")
    };

    let mut env = Environment::new();
    let lines: Vec<&str> = text.lines().collect();

    for outcome in process_document(&text, &mut env) {
        let source = lines.get(outcome.line - 1).copied().unwrap_or_default();
        let label = match &outcome.classification {
            Ok(line_type) => line_type.to_string(),
            Err(_) => "error".to_string(),
        };

        if args.classify {
            println!("{:>3} | {label:<5} | {source}", outcome.line);
            continue;
        }

        match (&outcome.classification, &outcome.value) {
            (Err(e), _) => println!("{:>3} | {label:<5} | error: {e}", outcome.line),
            (Ok(LineType::Calculation), Some(Ok(value))) => {
                println!("{:>3} | {label:<5} | {source} => {}",
                         outcome.line,
                         value.format_grouped());
            },
            (Ok(LineType::Calculation), Some(Err(e))) => {
                println!("{:>3} | {label:<5} | {source} => error: {e}", outcome.line);
            },
            _ => println!("{:>3} | {label:<5} | {source}", outcome.line),
        }
    }
}
