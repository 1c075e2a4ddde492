use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use colored::Colorize;
use loxscan::{display_error, lexer::lexer::tokenize, ErrorCollector, Token};

/// Exit codes follow sysexits.h.
const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;
const EX_IOERR: u8 = 74;

#[derive(Parser)]
#[command(name = "loxscan")]
#[command(author, version, about = "Tokenizes Lox scripts", long_about = None)]
struct Cli {
    /// Script to scan; starts an interactive prompt when omitted
    script: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Only report errors, do not print tokens
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(EX_USAGE);
        }
    };

    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    let result = match &cli.script {
        Some(script) => run_file(script, cli.quiet),
        None => run_prompt(cli.quiet),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            ExitCode::from(EX_IOERR)
        }
    }
}

fn run_file(script: &Path, quiet: bool) -> Result<ExitCode> {
    log::info!("Scanning {:?}", script);

    let source = fs::read_to_string(script)
        .with_context(|| format!("Failed to read source file: {:?}", script))?;
    let (tokens, errors) = tokenize(&source);

    if !quiet {
        print_tokens(&tokens);
    }

    if errors.has_errors() {
        report_errors(&errors, &source, &script.display().to_string());
        return Ok(ExitCode::from(EX_DATAERR));
    }

    Ok(ExitCode::SUCCESS)
}

fn run_prompt(quiet: bool) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut input = String::new();

    loop {
        print!("{} ", ">".blue().bold());
        stdout.flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            println!();
            break;
        }

        let line = input.trim_end_matches(['\n', '\r']);

        // Every line gets a fresh collector, so an error never leaks into the next one.
        let (tokens, errors) = tokenize(line);
        if !quiet {
            print_tokens(&tokens);
        }
        if errors.has_errors() {
            report_errors(&errors, line, "<stdin>");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!("{}", token);
    }
}

fn report_errors(errors: &ErrorCollector, source: &str, file: &str) {
    for error in errors.errors() {
        eprintln!("{}", error);
        log::debug!("{:?}", error.get_kind());
        display_error(error, source, file);
    }
}
