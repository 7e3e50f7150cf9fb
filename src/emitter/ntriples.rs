use std::io::{self, Write};

use super::{node_term, TriplesEmitter};

/// N-Triples format emitter. Streams triples as `<s> <p> <o> .` lines.
pub struct NTriplesEmitter<W: Write> {
    writer: W,
    count: u64,
}

impl<W: Write> NTriplesEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }
}

/// Escape a string for an N-Triples literal (per RDF 1.1 N-Triples spec).
pub fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                // Control chars: \uXXXX
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out
}

/// `"value"` or `"value"@lang`.
pub(crate) fn literal_term(value: &str, lang: &str) -> String {
    let escaped = escape_literal(value);
    if lang.is_empty() {
        format!("\"{escaped}\"")
    } else {
        format!("\"{escaped}\"@{lang}")
    }
}

impl<W: Write> TriplesEmitter for NTriplesEmitter<W> {
    fn emit_iri(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()> {
        let s = node_term(subject);
        let o = node_term(object);
        writeln!(self.writer, "{s} <{predicate}> {o} .")?;
        self.count += 1;
        Ok(())
    }

    fn emit_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        lang: &str,
    ) -> io::Result<()> {
        let s = node_term(subject);
        let o = literal_term(value, lang);
        writeln!(self.writer, "{s} <{predicate}> {o} .")?;
        self.count += 1;
        Ok(())
    }

    fn add_prefix(&mut self, _prefix: &str, _iri: &str) {
        // N-Triples has no prefixes.
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn triple_count(&self) -> u64 {
        self.count
    }
}
