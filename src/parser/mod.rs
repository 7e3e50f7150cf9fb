//! Turtle-subset parser.
//!
//! [`Parser`] walks a document statement by statement, dispatching each to
//! the directive handler (`@base`, `@prefix`) or the triple builder, and
//! collects triples in emission order.

pub mod builder;
pub mod cursor;
pub mod directive;
pub mod error;
pub mod prefixes;
pub mod reader;

use tracing::debug;

use crate::model::ontology::standard;
use crate::model::ontology::turtle::{BASE_DIRECTIVE, PREFIX_DIRECTIVE};
use crate::model::triple::Triple;

pub use error::{ParseError, Result};
pub use prefixes::{Namespaces, PrefixTable};
pub use reader::{ObjectReader, Terminator, Token};

/// Bytes that end a bare token.
pub const DEFAULT_STOP_BYTES: &[u8] = b" \t\r\n,;";

/// What to do with a `^^datatype` annotation after a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatatypePolicy {
    /// Read the datatype IRI and drop it; the literal keeps its text.
    #[default]
    Discard,
    /// Fail the parse with a syntax error.
    Reject,
}

/// Options controlling parsing.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Base IRI in effect before any `@base` directive.
    pub base_iri: String,
    /// IRI the bare predicate `a` expands to.
    pub type_iri: String,
    /// Bytes that end a bare token.
    pub stop_bytes: Vec<u8>,
    pub datatypes: DatatypePolicy,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            base_iri: String::new(),
            type_iri: standard::RDF_TYPE.to_string(),
            stop_bytes: DEFAULT_STOP_BYTES.to_vec(),
            datatypes: DatatypePolicy::Discard,
        }
    }
}

/// A parsed document: its triples plus the namespace state it ended with.
#[derive(Debug, Clone)]
pub struct Document {
    pub triples: Vec<Triple>,
    pub base: String,
    pub prefixes: PrefixTable,
}

/// Parse `input` with default options.
pub fn parse(input: &str) -> Result<Vec<Triple>> {
    parse_with(input, &ParserOptions::default())
}

/// Parse raw bytes, which must be UTF-8.
pub fn parse_bytes(input: &[u8]) -> Result<Vec<Triple>> {
    parse(std::str::from_utf8(input)?)
}

pub fn parse_with(input: &str, options: &ParserOptions) -> Result<Vec<Triple>> {
    Parser::new(input, options).parse()
}

/// Single-use parser over one document.
pub struct Parser<'a> {
    reader: ObjectReader<'a>,
    namespaces: Namespaces,
    options: &'a ParserOptions,
    triples: Vec<Triple>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: &'a ParserOptions) -> Self {
        Self {
            reader: ObjectReader::new(input, options),
            namespaces: Namespaces::with_base(&options.base_iri),
            options,
            triples: Vec::new(),
        }
    }

    /// Parse the whole document, returning its triples in emission order.
    pub fn parse(self) -> Result<Vec<Triple>> {
        self.parse_document().map(|doc| doc.triples)
    }

    /// Parse the whole document, keeping the final base IRI and prefixes.
    pub fn parse_document(mut self) -> Result<Document> {
        loop {
            let cursor = self.reader.cursor_mut();
            cursor.skip_whitespace();
            if cursor.is_eof() {
                break;
            }
            let before = cursor.position();
            if cursor.starts_with(BASE_DIRECTIVE) {
                self.parse_base()?;
            } else if cursor.starts_with(PREFIX_DIRECTIVE) {
                self.parse_prefix()?;
            } else {
                self.parse_statement()?;
            }
            ensure_progress(before, self.reader.cursor().position())?;
        }
        debug!(
            triples = self.triples.len(),
            prefixes = self.namespaces.prefixes.len(),
            "document parsed"
        );
        Ok(Document {
            triples: self.triples,
            base: self.namespaces.base,
            prefixes: self.namespaces.prefixes,
        })
    }

    fn next_token(&mut self) -> Result<Token> {
        self.reader.next_token(&self.namespaces)
    }
}

/// Every top-level step must consume input.
fn ensure_progress(before: usize, after: usize) -> Result<()> {
    if after > before {
        Ok(())
    } else {
        Err(ParseError::internal(before, "parser is stuck"))
    }
}
