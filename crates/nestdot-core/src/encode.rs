//! The recursive edge encoder.
//!
//! Walks a nested [`Value`] depth-first and emits one `source->destination;`
//! edge string per parent/child relationship, in traversal order. Containers
//! nested as anonymous values receive synthetic names from a [`NodeNamer`]
//! that lives for exactly one [`encode`] call.

use indexmap::IndexMap;

use nestdot_error::{Error, ErrorKind, Result};

use crate::namer::NodeNamer;
use crate::value::{Shape, Value};

/// Render one edge in the literal output form: no spaces, trailing semicolon.
fn arrow(source: &str, destination: &str) -> String {
    format!("{source}->{destination};")
}

/// Encode a nested value into an ordered list of edge strings.
///
/// The root must be a mapping or a container; scalars and ignored kinds are
/// rejected with `InvalidInputKind`. A root container is never named as a
/// node itself: its mapping elements expand through their keys and its
/// container elements through synthetic names, with no incoming edge. A
/// scalar directly under such a root would need an edge with no source and
/// is rejected as well.
///
/// Synthetic-name counters are freshly allocated per call, so repeated or
/// concurrent invocations are independent.
pub fn encode(root: &Value) -> Result<Vec<String>> {
    let mut namer = NodeNamer::new();
    let mut edges = Vec::new();

    match root.shape() {
        Shape::Mapping(map) => expand_mapping(map, &mut namer, &mut edges),
        Shape::Container(_, elements) => {
            for element in elements {
                match element.shape() {
                    Shape::Scalar(label) => {
                        return Err(Error::new(
                            ErrorKind::InvalidInputKind,
                            "scalar element under an unlabeled root has no source label",
                        )
                        .with_operation("encode")
                        .with_context("element", label));
                    }
                    Shape::Container(kind, children) => {
                        let name = namer.next(kind);
                        expand_container(&name, children, &mut namer, &mut edges);
                    }
                    Shape::Mapping(map) => expand_mapping(map, &mut namer, &mut edges),
                    Shape::Ignored => {}
                }
            }
        }
        Shape::Scalar(_) | Shape::Ignored => {
            return Err(Error::invalid_input_kind(root.kind_name()).with_operation("encode"));
        }
    }

    Ok(edges)
}

/// Expand every entry of a mapping in insertion order.
fn expand_mapping(map: &IndexMap<String, Value>, namer: &mut NodeNamer, edges: &mut Vec<String>) {
    for (key, value) in map {
        expand_entry(key, value, namer, edges);
    }
}

/// Expand one key/value pair of a mapping.
fn expand_entry(key: &str, value: &Value, namer: &mut NodeNamer, edges: &mut Vec<String>) {
    match value.shape() {
        Shape::Scalar(label) => edges.push(arrow(key, &label)),
        Shape::Container(_, elements) => expand_container(key, elements, namer, edges),
        Shape::Mapping(map) => {
            // A nested mapping is introduced through its keys: each subkey
            // hangs off the parent key, then expands as an entry of its own.
            for (sub_key, sub_value) in map {
                edges.push(arrow(key, sub_key));
                expand_entry(sub_key, sub_value, namer, edges);
            }
        }
        Shape::Ignored => {}
    }
}

/// Expand the elements of a container whose node label is `parent`.
fn expand_container(
    parent: &str,
    elements: &[Value],
    namer: &mut NodeNamer,
    edges: &mut Vec<String>,
) {
    for element in elements {
        match element.shape() {
            Shape::Scalar(label) => edges.push(arrow(parent, &label)),
            Shape::Container(kind, children) => {
                let name = namer.next(kind);
                edges.push(arrow(parent, &name));
                expand_container(&name, children, namer, edges);
            }
            Shape::Mapping(map) => {
                // The first key in iteration order anchors the mapping to
                // its parent; the full mapping then expands normally. An
                // empty mapping has no anchor and encodes to nothing.
                if let Some((first_key, _)) = map.first() {
                    edges.push(arrow(parent, first_key));
                    expand_mapping(map, namer, edges);
                }
            }
            Shape::Ignored => {}
        }
    }
}
