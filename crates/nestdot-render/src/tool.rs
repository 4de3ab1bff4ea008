//! External rendering tool lookup and invocation.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use nestdot_error::{Error, Result};

/// Name of the external rendering executable.
pub const RENDERER: &str = "dot";

/// Locate `tool` on PATH, which-style.
pub fn find_tool(tool: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    for dir in env::split_paths(&path) {
        let candidate = dir.join(tool);
        if candidate.is_file() {
            return Some(candidate);
        }
        #[cfg(windows)]
        {
            let candidate = dir.join(format!("{tool}.exe"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

/// Derive the image output path: same location, extension swapped for `format`.
pub fn image_path(dot_path: &Path, format: &str) -> PathBuf {
    dot_path.with_extension(format)
}

/// Run the external renderer against a written graph description, producing
/// an image next to it.
///
/// Fails with `RenderingToolMissing` when the executable cannot be located
/// and with `RenderingFailed` on a non-zero exit. The text artifact stays in
/// place either way so the input can be inspected.
pub fn render_image(dot_path: &Path, format: &str) -> Result<PathBuf> {
    let Some(tool) = find_tool(RENDERER) else {
        return Err(Error::rendering_tool_missing(RENDERER).with_operation("render_image"));
    };
    let out_path = image_path(dot_path, format);

    debug!(tool = %tool.display(), input = %dot_path.display(), "invoking renderer");
    let status = Command::new(&tool)
        .arg(format!("-T{format}"))
        .arg(dot_path)
        .arg("-o")
        .arg(&out_path)
        .status()
        .map_err(|err| {
            Error::from(err)
                .with_operation("render_image")
                .with_context("tool", tool.display().to_string())
        })?;

    if !status.success() {
        return Err(
            Error::rendering_failed(format!("renderer exited with {status}"))
                .with_operation("render_image")
                .with_context("input", dot_path.display().to_string())
                .with_context("format", format),
        );
    }

    info!(path = %out_path.display(), "image written");
    Ok(out_path)
}
