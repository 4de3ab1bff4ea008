//! # nestdot-render
//!
//! Serializes encoder output into a named digraph block, persists it to a
//! `.dot` file, and optionally drives the external Graphviz renderer to
//! produce an image.
//!
//! The encoder itself lives in `nestdot-core`; everything here is the thin
//! I/O and process-invocation layer around it.

mod dot;
mod tool;

use std::path::PathBuf;

use tracing::info;

use nestdot_core::Value;
use nestdot_error::{Error, Result};

pub use dot::{DOT_EXT, persist, render_graph, sanitize_id};
pub use tool::{RENDERER, find_tool, image_path, render_image};

/// Default graph name when the caller does not provide one.
pub const DEFAULT_GRAPH_NAME: &str = "nestdot";

/// Options for the one-call [`draw`] pipeline.
#[derive(Debug, Clone)]
pub struct DrawOptions {
    /// Graph name; also the artifact file stem.
    pub name: Option<String>,
    /// Output directory. Defaults to the current working directory; must
    /// already exist.
    pub directory: Option<PathBuf>,
    /// Invoke the external renderer after writing the text artifact.
    pub render: bool,
    /// Image format handed to the renderer.
    pub format: String,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            name: None,
            directory: None,
            render: false,
            format: "gif".to_string(),
        }
    }
}

impl DrawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    pub fn with_render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }
}

/// Encode, wrap, persist, and optionally render a nested value.
///
/// Returns the path of the last artifact written: the image when rendering
/// is requested, the `.dot` text otherwise.
pub fn draw(root: &Value, options: &DrawOptions) -> Result<PathBuf> {
    let name = options.name.as_deref().unwrap_or(DEFAULT_GRAPH_NAME);
    let directory = match &options.directory {
        Some(directory) => directory.clone(),
        None => std::env::current_dir().map_err(|err| Error::from(err).with_operation("draw"))?,
    };

    let text = render_graph(root, name)?;
    let dot_path = persist(&text, &directory, name)?;
    info!(path = %dot_path.display(), "graph description written");

    if options.render {
        return render_image(&dot_path, &options.format);
    }
    Ok(dot_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_writes_dot_artifact() {
        let dir = tempfile::tempdir().expect("tempdir");
        let value = Value::map([("a", Value::Int(1))]);
        let options = DrawOptions::new().with_name("test1").with_directory(dir.path());

        let path = draw(&value, &options).expect("draw should succeed");
        assert_eq!(path, dir.path().join("test1.dot"));

        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "digraph test1 {\n  a->1;\n}\n");
    }

    #[test]
    fn test_draw_uses_default_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let value = Value::map([("a", Value::Int(1))]);
        let options = DrawOptions::new().with_directory(dir.path());

        let path = draw(&value, &options).expect("draw should succeed");
        assert_eq!(path, dir.path().join("nestdot.dot"));
    }

    #[test]
    fn test_draw_rejects_invalid_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        let options = DrawOptions::new().with_directory(dir.path());

        let err = draw(&Value::Int(3), &options).expect_err("scalar root must fail");
        assert_eq!(err.kind(), nestdot_core::ErrorKind::InvalidInputKind);
        // Nothing may be written for a rejected input.
        assert!(!dir.path().join("nestdot.dot").exists());
    }
}
