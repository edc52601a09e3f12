use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use arith::{lexer::lexer::tokenize, parser::parser::parse, render_error};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("usage: {} <file>", args.first().map(String::as_str).unwrap_or("arith"));
        return ExitCode::from(2);
    }

    let file_path = PathBuf::from(&args[1]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args[1].clone());

    let source = match read_to_string(&file_path) {
        Ok(source) => source,
        Err(error) => {
            warn!(path = %file_path.display(), %error, "failed to read source file");
            eprintln!("Failed to read {}: {}", file_path.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", render_error(&error, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            eprint!("{}", render_error(&error, &source, &file_name));
            return ExitCode::FAILURE;
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());
    println!("Total time: {:?}", start.elapsed());

    for stmt in &program {
        println!("{}", stmt);
    }

    ExitCode::SUCCESS
}
