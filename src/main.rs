//! Greeter - Entry Point

use clap::Parser;
use greeter::model::AppError;
use greeter::{Greeter, report};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Greeter - format greetings for one or more names
#[derive(Parser, Debug)]
#[command(name = "greeter")]
#[command(version)]
#[command(about = "Format greetings for one or more names and report statistics")]
pub struct Args {
    /// Names to greet (runs the demo when none are given)
    pub names: Vec<String>,

    /// Greeting word for every name in this run; may be blank
    #[arg(short, long)]
    pub greeting: Option<String>,

    /// Skip invalid names instead of failing
    #[arg(short, long)]
    pub tolerant: bool,

    /// Title-case names before greeting them
    #[arg(short = 'i', long)]
    pub case_insensitive: bool,

    /// Print statistics after the greetings
    #[arg(long)]
    pub stats: bool,

    /// Print a JSON report instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Run the feature walkthrough
    #[arg(long)]
    pub demo: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = greeter::config::load_config_with_precedence(args.config.clone())?;
        let merged = greeter::config::merge_config(config_file);
        let with_env = greeter::config::apply_env_overrides(merged);
        greeter::config::apply_cli_overrides(
            with_env,
            args.case_insensitive,
            args.tolerant,
            args.stats,
        )
    };

    greeter::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    if args.demo || args.names.is_empty() {
        print!("{}", report::render_demo()?);
        return Ok(());
    }

    let mut greeter = Greeter::new(config.greeter_config()?);
    let summary = report::greet_names(
        &mut greeter,
        &args.names,
        args.greeting.as_deref(),
        config.tolerant,
    )?;

    eprint!("{}", report::render_skipped(&summary));
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", report::render_text(&summary, config.show_stats));
    }

    Ok(())
}
