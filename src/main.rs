use std::{
    env,
    fs::read_to_string,
    io::{self, Write},
    path::Path,
    process,
    time::Instant,
};

use interpreter::{display_error, lexer::lexer::tokenize_strict, repl::repl};
use log::{debug, error};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => run_repl(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: {} [file]", args[0]);
            process::exit(2);
        }
    }
}

fn run_repl() {
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(err) = repl::start(stdin.lock(), stdout.lock()) {
        error!("repl stopped: {}", err);
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run_file(file_path: &str) {
    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string());

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let tokens = match tokenize_strict(source.clone(), Some(file_name)) {
        Ok(tokens) => tokens,
        Err(err) => {
            display_error(&err, &source);
            process::exit(1);
        }
    };
    debug!("tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    let mut stdout = io::stdout().lock();
    for token in &tokens {
        if let Err(err) = writeln!(stdout, "{}", token) {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
