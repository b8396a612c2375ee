use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use mycommands::components::{ColorChoice, render_line};
use mycommands::config::DEFAULT_LOG_FILTER;
use mycommands::models::OutputLine;
use mycommands::{OutputSink, dispatch};

/// Minimal filesystem commands
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// When to color output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
    /// Command name (pwd, ls, cat, cp) followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER)).init();

    let args = Args::parse();
    let color = args.color.enabled();
    let mut stdout = io::stdout().lock();

    let (written, failed) = {
        let mut emit = |line: &OutputLine| render_line(&mut stdout, line, color);
        let mut out = OutputSink::new(&mut emit);
        let written = dispatch(&args.tokens, &mut out);
        (written, out.failed())
    };

    if let Err(e) = written.and_then(|()| stdout.flush()) {
        log::error!("failed to write output: {}", e);
        return ExitCode::FAILURE;
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
