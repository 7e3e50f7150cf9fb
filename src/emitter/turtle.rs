use std::collections::HashMap;
use std::io::{self, Write};

use super::{node_term, TriplesEmitter};
use crate::model::iri;

/// Turtle format emitter with prefix support.
///
/// Prefix labels are accepted with or without their trailing colon, so the
/// parser's `PrefixTable` entries (`"ex:"`) can be registered as-is.
pub struct TurtleEmitter<W: Write> {
    writer: W,
    count: u64,
    prefixes: HashMap<String, String>,
    prefix_written: bool,
}

impl<W: Write> TurtleEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            count: 0,
            prefixes: HashMap::new(),
            prefix_written: false,
        }
    }

    /// Write all registered prefixes (called before first triple).
    fn write_prefixes(&mut self) -> io::Result<()> {
        if self.prefix_written {
            return Ok(());
        }
        self.prefix_written = true;
        // Sort for deterministic output
        let mut prefixes: Vec<_> = self.prefixes.iter().collect();
        prefixes.sort_by_key(|(k, _)| (*k).clone());
        for (prefix, ns) in prefixes {
            writeln!(self.writer, "@prefix {prefix}: <{ns}> .")?;
        }
        if !self.prefixes.is_empty() {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    /// Try to compact an IRI using registered prefixes.
    fn compact_iri(&self, node: &str) -> String {
        if iri::is_blank_node(node) {
            return node_term(node);
        }
        // Find longest matching prefix
        let mut best: Option<(&str, &str)> = None;
        for (prefix, ns) in &self.prefixes {
            if node.starts_with(ns.as_str())
                && best.is_none_or(|(_, prev_ns)| ns.len() > prev_ns.len())
            {
                best = Some((prefix.as_str(), ns.as_str()));
            }
        }
        if let Some((prefix, ns)) = best {
            let local = &node[ns.len()..];
            // Only compact if local name is valid (alphanumeric + _ + -)
            if !local.is_empty()
                && local
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
            {
                return format!("{prefix}:{local}");
            }
        }
        format!("<{node}>")
    }

    fn escape_literal(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                _ => out.push(c),
            }
        }
        out
    }
}

impl<W: Write> TriplesEmitter for TurtleEmitter<W> {
    fn emit_iri(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()> {
        self.write_prefixes()?;
        let s = self.compact_iri(subject);
        let p = self.compact_iri(predicate);
        let o = self.compact_iri(object);
        writeln!(self.writer, "{s} {p} {o} .")?;
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
        self.write_prefixes()?;
        let s = self.compact_iri(subject);
        let p = self.compact_iri(predicate);
        let escaped = Self::escape_literal(value);
        if lang.is_empty() {
            writeln!(self.writer, "{s} {p} \"{escaped}\" .")?;
        } else {
            writeln!(self.writer, "{s} {p} \"{escaped}\"@{lang} .")?;
        }
        self.count += 1;
        Ok(())
    }

    fn add_prefix(&mut self, prefix: &str, iri: &str) {
        let label = prefix.strip_suffix(':').unwrap_or(prefix);
        self.prefixes.insert(label.to_string(), iri.to_string());
    }

    fn flush(&mut self) -> io::Result<()> {
        self.write_prefixes()?;
        self.writer.flush()
    }

    fn triple_count(&self) -> u64 {
        self.count
    }
}
