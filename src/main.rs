use std::{fs, io, process::ExitCode};

use clap::Parser;
use tlang::{
    interpreter::{environment::Environment, evaluator::core::Context},
    repl,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// tlang runs programs written in T, a small scripting language with
/// closures, loops and strings.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tlang to read the program from the file named by CONTENTS
    /// instead of treating CONTENTS as the program itself.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Starts an interactive session. This is also what happens when no
    /// program is given.
    #[arg(short, long, conflicts_with_all = ["file", "contents"])]
    repl: bool,

    contents: Option<String>,
}

/// Installs a stderr logger filtered by `RUST_LOG`. Nothing is logged unless
/// the variable is set.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn run_script(source: &str) -> ExitCode {
    let (program, errors) = tlang::parse(source);
    if !errors.is_empty() {
        for message in errors {
            eprintln!("\t{message}");
        }
        return ExitCode::FAILURE;
    }

    let mut context = Context::new();
    let result = context.try_eval_program(&program, &Environment::new_root());
    for line in context.take_output() {
        println!("{line}");
    }

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("ERROR: {error}");
            ExitCode::FAILURE
        },
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let Some(contents) = args.contents.filter(|_| !args.repl) else {
        return match repl::start(io::stdin().lock(), io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("{error}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    run_script(&script)
}
