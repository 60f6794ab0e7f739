use std::{fs, process};

use clap::Parser;
use plume::{
    interpreter::{parser::core::parse_program, value::heap::Heap},
    run_script,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// plume is a small expression language with integers, strings,
/// conditionals and built-in calls.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells plume to read `contents` as a file path instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode automatically prints the value of the last expression of
    /// the script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Prints the parsed expressions instead of evaluating them.
    #[arg(long)]
    ast: bool,

    contents: String,
}

/// Installs a stderr subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=plume=trace`.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_err() {
        return;
    }

    let _ = tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                          .with(EnvFilter::from_default_env())
                                          .try_init();
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    if args.ast {
        let mut heap = Heap::new();
        match parse_program(&script, &mut heap) {
            Ok(program) => {
                for expr in &program {
                    println!("{expr:#?}");
                }
            },
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = run_script(&script, args.pipe_mode) {
        eprintln!("{e}");
        process::exit(1);
    }
}
