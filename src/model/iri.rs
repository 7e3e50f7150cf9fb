//! IRI resolution and blank-node naming.

/// Marker that separates an absolute IRI's scheme from the rest.
const SCHEME_SEPARATOR: &str = "://";

/// Prefix carried by every synthesized blank-node identifier.
pub const BLANK_NODE_PREFIX: &str = "_:";

/// Returns `true` when `iri` carries a scheme (`http://...`).
pub fn is_absolute(iri: &str) -> bool {
    iri.contains(SCHEME_SEPARATOR)
}

/// Resolve an IRI reference against `base`.
///
/// Absolute references are returned unchanged. Relative ones are appended to
/// the base verbatim; no path normalization is performed.
pub fn resolve(base: &str, reference: &str) -> String {
    if is_absolute(reference) {
        reference.to_string()
    } else {
        format!("{base}{reference}")
    }
}

/// Blank-node identifier for a `[ ... ]` opened under `subject` / `predicate`.
///
/// The id is deterministic, so the same subject/predicate pair reused in a
/// later statement names the same node.
pub fn blank_node_id(subject: &str, predicate: &str) -> String {
    format!("{BLANK_NODE_PREFIX}{subject}_{predicate}")
}

pub fn is_blank_node(term: &str) -> bool {
    term.starts_with(BLANK_NODE_PREFIX)
}

/// Label usable after `_:` in N-Triples / Turtle output.
///
/// Synthesized ids embed full IRIs, so every character outside
/// `[A-Za-z0-9_-]` is replaced with `_`.
pub fn blank_node_label(id: &str) -> String {
    let raw = id.strip_prefix(BLANK_NODE_PREFIX).unwrap_or(id);
    let label: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if label.is_empty() {
        "b".to_string()
    } else {
        label
    }
}
