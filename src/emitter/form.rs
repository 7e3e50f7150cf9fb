//! Form-encoded request bodies for a triple-store insert endpoint.
//!
//! Each line is an `application/x-www-form-urlencoded` body carrying the
//! `subj`, `pred`, `obj` and `lang` fields. Sending them is left to the
//! ingestion client.

use std::io::{self, Write};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::TriplesEmitter;

/// Bytes left unescaped in form values, as in the WHATWG urlencoded serializer.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Encode one form value; spaces become `+`.
pub fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, FORM_ENCODE_SET)
        .to_string()
        .replace("%20", "+")
}

/// Build the insert request body for one triple.
pub fn request_body(subject: &str, predicate: &str, object: &str, lang: &str) -> String {
    format!(
        "subj={}&pred={}&obj={}&lang={}",
        encode_value(subject),
        encode_value(predicate),
        encode_value(object),
        encode_value(lang)
    )
}

pub struct FormEmitter<W: Write> {
    writer: W,
    count: u64,
}

impl<W: Write> FormEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }
}

impl<W: Write> TriplesEmitter for FormEmitter<W> {
    fn emit_iri(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()> {
        self.emit_literal(subject, predicate, object, "")
    }

    fn emit_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        lang: &str,
    ) -> io::Result<()> {
        writeln!(self.writer, "{}", request_body(subject, predicate, value, lang))?;
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
