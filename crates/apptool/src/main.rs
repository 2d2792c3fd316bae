//! apptool CLI - Go service scaffolding

use anyhow::{Context, Result};
use apptool_core::{GenerationReport, Generator, Mode, RunConfig};
use clap::Parser;
use colored::Colorize;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Long flags that are also accepted with a single dash (`-mod demo`)
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["type", "mod", "idl", "dir", "verbose"];

#[derive(Parser, Debug)]
#[command(name = "apptool")]
#[command(about = "CLI for scaffolding Go backend services")]
#[command(version)]
pub struct Args {
    /// What to generate: `new` for a full project, `update` to rewrite model files
    #[arg(short = 't', long = "type", default_value_t = Mode::New)]
    pub kind: Mode,

    /// Go module name
    #[arg(short, long = "mod")]
    pub module: String,

    /// Interface description file to derive routes and models from (empty for none)
    #[arg(short, long)]
    pub idl: Option<OsString>,

    /// Project directory (defaults to ./<mod> when absent or empty)
    #[arg(short, long)]
    pub dir: Option<OsString>,

    /// Log each generated file
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse_from(normalize_args(std::env::args_os()));
    init_logging(args.verbose);

    let config = args.run_config().context("Invalid arguments")?;

    let generator = Generator::new().context("Failed to load built-in templates")?;
    let report = generator.generate(&config).with_context(|| {
        format!(
            "Failed to generate project in {}",
            config.target_dir().display()
        )
    })?;

    print_summary(&report);
    println!("{}", "success, enjoy!".green().bold());

    Ok(())
}

impl Args {
    /// Build the run configuration; empty `--idl` and `--dir` count as absent
    pub fn run_config(self) -> apptool_core::Result<RunConfig> {
        RunConfig::new(
            self.kind,
            self.module,
            self.dir.map(PathBuf::from),
            self.idl.map(PathBuf::from),
        )
    }
}

/// Rewrite `-type`, `-mod=demo` and friends to their `--` form
///
/// Short flags (`-t`), `--` flags and everything after a bare `--` pass
/// through unchanged.
fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.to_str().and_then(single_dash_long_flag) {
                Some(flag) => OsString::from(format!("-{}", flag)),
                None => arg,
            }
        })
        .collect()
}

/// `Some(arg)` when `arg` is a known long flag written with one dash
fn single_dash_long_flag(arg: &str) -> Option<&str> {
    let rest = arg.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
    let name = rest.split('=').next().unwrap_or(rest);
    SINGLE_DASH_LONG_FLAGS.contains(&name).then_some(arg)
}

/// Send tracing output to stderr; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_summary(report: &GenerationReport) {
    let action = match report.mode {
        Mode::New => "Created",
        Mode::Update => "Updated",
    };

    println!(
        "{} {} file(s) in {}",
        action.green().bold(),
        report.written.len(),
        report.target_dir.display()
    );
    for path in &report.written {
        let shown = path.strip_prefix(&report.target_dir).unwrap_or(path);
        println!("  {} {}", "->".blue(), shown.display());
    }
    println!();
}
