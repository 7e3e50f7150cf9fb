use std::io::{self, Write};

use super::TriplesEmitter;
use crate::model::iri;
use crate::model::triple::Triple;

/// JSON-lines emitter: one serialized [`Triple`] object per line.
pub struct JsonEmitter<W: Write> {
    writer: W,
    count: u64,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }
}

impl<W: Write> TriplesEmitter for JsonEmitter<W> {
    fn emit_iri(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()> {
        let triple = if iri::is_blank_node(object) {
            Triple::blank_node(subject, predicate, object)
        } else {
            Triple::iri(subject, predicate, object)
        };
        self.emit(&triple)
    }

    fn emit_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        lang: &str,
    ) -> io::Result<()> {
        self.emit(&Triple::literal(subject, predicate, value, lang))
    }

    fn emit(&mut self, triple: &Triple) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, triple)?;
        self.writer.write_all(b"\n")?;
        self.count += 1;
        Ok(())
    }

    fn add_prefix(&mut self, _prefix: &str, _iri: &str) {}

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn triple_count(&self) -> u64 {
        self.count
    }
}
