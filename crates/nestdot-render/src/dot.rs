//! Digraph text assembly and artifact persistence.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use nestdot_core::{Value, encode};
use nestdot_error::{Error, Result};

/// File extension of the graph description artifact.
pub const DOT_EXT: &str = "dot";

/// Sanitize a string to be a valid graph identifier.
/// Replaces any non-alphanumeric character with underscore.
pub fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Render a nested value as a named digraph block:
///
/// ```text
/// digraph <name> {
///   <edge>
///   ...
/// }
/// ```
pub fn render_graph(root: &Value, name: &str) -> Result<String> {
    let edges = encode(root)?;

    let estimated_size = edges.iter().map(|e| e.len() + 3).sum::<usize>() + name.len() + 16;
    let mut output = String::with_capacity(estimated_size);
    output.push_str("digraph ");
    output.push_str(&sanitize_id(name));
    output.push_str(" {\n");
    for edge in &edges {
        output.push_str("  ");
        output.push_str(edge);
        output.push('\n');
    }
    output.push_str("}\n");
    Ok(output)
}

/// Write digraph text to `<directory>/<name>.dot` and return the path.
///
/// The directory must already exist; nothing is created here, and a missing
/// or unwritable directory surfaces as the mapped filesystem error.
pub fn persist(text: &str, directory: &Path, name: &str) -> Result<PathBuf> {
    let path = directory.join(format!("{name}.{DOT_EXT}"));
    fs::write(&path, text).map_err(|err| {
        Error::from(err)
            .with_operation("persist")
            .with_context("path", path.display().to_string())
    })?;
    debug!(path = %path.display(), bytes = text.len(), "graph description written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use nestdot_core::ErrorKind;

    #[test]
    fn test_render_graph_wraps_edges() {
        let value = Value::map([("a", Value::Int(1)), ("b", Value::Int(2))]);
        let text = render_graph(&value, "simple").expect("rendering should succeed");
        assert_eq!(text, "digraph simple {\n  a->1;\n  b->2;\n}\n");
    }

    #[test]
    fn test_render_graph_with_no_edges() {
        let value = Value::map([] as [(&str, Value); 0]);
        let text = render_graph(&value, "empty").expect("rendering should succeed");
        assert_eq!(text, "digraph empty {\n}\n");
    }

    #[test]
    fn test_render_graph_sanitizes_name() {
        let value = Value::map([("a", Value::Int(1))]);
        let text = render_graph(&value, "my graph-1").expect("rendering should succeed");
        assert!(text.starts_with("digraph my_graph_1 {"));
    }

    #[test]
    fn test_render_graph_rejects_scalar_root() {
        let err = render_graph(&Value::Int(1), "bad").expect_err("scalar root must fail");
        assert_eq!(err.kind(), ErrorKind::InvalidInputKind);
    }

    #[test]
    fn test_sanitize_id() {
        assert_eq!(sanitize_id("plain"), "plain");
        assert_eq!(sanitize_id("a b.c/d"), "a_b_c_d");
    }

    #[test]
    fn test_persist_writes_artifact() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = persist("digraph g {\n}\n", dir.path(), "g").expect("persist should succeed");

        assert_eq!(path, dir.path().join("g.dot"));
        let written = fs::read_to_string(&path).expect("read back");
        assert_eq!(written, "digraph g {\n}\n");
    }

    #[test]
    fn test_persist_fails_for_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("does-not-exist");
        let err = persist("digraph g {\n}\n", &missing, "g")
            .expect_err("missing directory must fail");
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
    }
}
