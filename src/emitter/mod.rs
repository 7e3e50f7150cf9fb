pub mod form;
pub mod json;
pub mod ntriples;
pub mod turtle;

use std::io;

use crate::model::iri;
use crate::model::triple::{ObjectKind, Triple};

/// Trait for writing parsed triples in different serialization formats.
pub trait TriplesEmitter {
    /// Emit a triple whose object is an IRI or blank node.
    fn emit_iri(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()>;
    /// Emit a triple with a literal object; `lang` is empty when untagged.
    fn emit_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        lang: &str,
    ) -> io::Result<()>;
    /// Register a namespace prefix (used by Turtle format).
    fn add_prefix(&mut self, prefix: &str, iri: &str);
    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;
    /// Return the number of triples emitted so far.
    fn triple_count(&self) -> u64;

    /// Emit one parsed triple.
    fn emit(&mut self, triple: &Triple) -> io::Result<()> {
        match triple.kind {
            ObjectKind::Literal => {
                self.emit_literal(&triple.subject, &triple.predicate, &triple.object, &triple.lang)
            }
            ObjectKind::Iri | ObjectKind::BlankNode => {
                self.emit_iri(&triple.subject, &triple.predicate, &triple.object)
            }
        }
    }

    /// Emit every triple in order.
    fn emit_all(&mut self, triples: &[Triple]) -> io::Result<()> {
        for triple in triples {
            self.emit(triple)?;
        }
        Ok(())
    }
}

/// `<iri>` or `_:label` for a subject/object node.
pub(crate) fn node_term(node: &str) -> String {
    if iri::is_blank_node(node) {
        format!("_:{}", iri::blank_node_label(node))
    } else {
        format!("<{node}>")
    }
}
