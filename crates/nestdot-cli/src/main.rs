use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use nestdot::{NestdotOptions, RunOutput, run_main};

#[derive(Parser, Debug)]
#[command(
    name = "nestdot",
    about = "nestdot: draw nested data as a Graphviz digraph",
    version
)]
pub struct Cli {
    /// Input JSON document; use '-' to read stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Graph name (defaults to the input file stem)
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    name: Option<String>,

    /// Output directory (must exist)
    #[arg(short = 'd', long = "out-dir", value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Invoke the external renderer on the written graph description
    #[arg(long, default_value_t = false)]
    render: bool,

    /// Image format handed to the renderer
    #[arg(short = 'T', long = "format", value_name = "FMT", default_value = "gif")]
    format: String,

    /// Print the digraph text to stdout instead of writing files
    #[arg(long, default_value_t = false, conflicts_with = "render")]
    stdout: bool,
}

pub fn run(args: Cli) -> ExitCode {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = NestdotOptions {
        input: args.input,
        name: args.name,
        out_dir: args.out_dir,
        render: args.render,
        format: args.format,
        stdout: args.stdout,
    };

    match run_main(&opts) {
        Ok(RunOutput::Text(text)) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Ok(RunOutput::Written(path)) => {
            println!("{}", path.display());
            tracing::info!(path = %path.display(), "output written");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            tracing::error!(error = %e, "execution failed");
            ExitCode::FAILURE
        }
    }
}

pub fn main() -> ExitCode {
    let args = Cli::parse();
    run(args)
}
