use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, io, process};
use wikiline_config::Config;

mod cases;

use cases::{Case, CaseFile};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Render a file, or stdin when no path is given.
    Render(Option<PathBuf>),
    /// Run a case file, or the configured one when no path is given.
    Check(Option<PathBuf>),
    /// Run the built-in cases.
    Demo,
    /// Remember the case file `check` uses by default.
    SetCases(PathBuf),
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [cmd] if cmd == "demo" => Some(Command::Demo),
        [cmd] if cmd == "render" => Some(Command::Render(None)),
        [cmd, path] if cmd == "render" => Some(Command::Render(Some(PathBuf::from(path)))),
        [cmd] if cmd == "check" => Some(Command::Check(None)),
        [cmd, path] if cmd == "check" => Some(Command::Check(Some(PathBuf::from(path)))),
        [cmd, path] if cmd == "set-cases" => Some(Command::SetCases(PathBuf::from(path))),
        _ => None,
    }
}

fn usage(program: &str) {
    eprintln!("Usage: {program} render [FILE]");
    eprintln!("       {program} check [CASES.toml]");
    eprintln!("       {program} demo");
    eprintln!("       {program} set-cases CASES.toml");
}

fn render(path: Option<PathBuf>) -> Result<()> {
    let source = match path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    log::debug!("rendering {} bytes", source.len());
    println!("{}", wikiline_engine::render(&source));
    Ok(())
}

fn cases_path(path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = path {
        return Ok(path);
    }
    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());
    match Config::load()? {
        Some(Config {
            cases_path: Some(path),
        }) => Ok(path),
        _ => bail!(
            "No case file given and no cases_path set in {}",
            config_path.display()
        ),
    }
}

fn set_cases(config_path: &Path, cases_path: PathBuf) -> Result<()> {
    let config = Config::store_cases_path(config_path, cases_path)?;
    if let Some(path) = &config.cases_path {
        log::info!(
            "Saved cases_path {} to {}",
            path.display(),
            config_path.display()
        );
    }
    Ok(())
}

/// Runs `cases` and reports each mismatch. Returns whether all passed.
fn run_cases(cases: &[Case]) -> bool {
    let failures = cases::check(cases);
    for failure in &failures {
        eprintln!("FAIL {}", failure.case.label());
        eprintln!("  expected: {:?}", failure.case.expected);
        eprintln!("  actual:   {:?}", failure.actual);
    }
    log::info!(
        "{} passed, {} failed",
        cases.len() - failures.len(),
        failures.len()
    );
    failures.is_empty()
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("wikiline-cli", String::as_str);

    let Some(command) = parse_args(args.get(1..).unwrap_or_default()) else {
        usage(program);
        process::exit(1);
    };

    let passed = match command {
        Command::Render(path) => {
            render(path)?;
            true
        }
        Command::Check(path) => {
            let path = cases_path(path)?;
            log::info!("Running cases from {}", path.display());
            run_cases(&CaseFile::load(&path)?.cases)
        }
        Command::Demo => run_cases(&cases::builtin()),
        Command::SetCases(path) => {
            set_cases(&Config::config_path(), path)?;
            true
        }
    };

    if !passed {
        process::exit(1);
    }
    Ok(())
}
