//! nestdot command-line interface.

pub mod input;

use std::path::{Path, PathBuf};

use nestdot_core::Result;
use nestdot_render::{DEFAULT_GRAPH_NAME, DrawOptions, draw, render_graph};

pub use input::{load_value, parse_value};

/// Options for running nestdot.
pub struct NestdotOptions {
    /// Input JSON document path; `-` reads stdin.
    pub input: String,
    /// Graph name; defaults to the input file stem.
    pub name: Option<String>,
    /// Output directory for written artifacts.
    pub out_dir: PathBuf,
    /// Invoke the external renderer after writing the text artifact.
    pub render: bool,
    /// Image format handed to the renderer.
    pub format: String,
    /// Emit digraph text instead of writing files.
    pub stdout: bool,
}

/// What a run produced.
#[derive(Debug)]
pub enum RunOutput {
    /// Digraph text destined for stdout.
    Text(String),
    /// Path of the last artifact written to disk.
    Written(PathBuf),
}

/// Main entry point
pub fn run_main(opts: &NestdotOptions) -> Result<RunOutput> {
    let value = input::load_value(&opts.input)?;
    let name = opts
        .name
        .clone()
        .unwrap_or_else(|| default_name(&opts.input));

    if opts.stdout {
        return Ok(RunOutput::Text(render_graph(&value, &name)?));
    }

    let options = DrawOptions::new()
        .with_name(name)
        .with_directory(opts.out_dir.clone())
        .with_render(opts.render)
        .with_format(opts.format.clone());
    Ok(RunOutput::Written(draw(&value, &options)?))
}

/// Graph name for an input argument: the file stem, or the default for stdin.
fn default_name(input: &str) -> String {
    if input == "-" {
        return DEFAULT_GRAPH_NAME.to_string();
    }
    Path::new(input)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| DEFAULT_GRAPH_NAME.to_string())
}
