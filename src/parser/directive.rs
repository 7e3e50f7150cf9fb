//! `@base` and `@prefix` directives.

use tracing::debug;

use super::error::{ParseError, Result};
use super::reader::Token;
use super::Parser;
use crate::model::ontology::turtle::{BASE_DIRECTIVE, PREFIX_DIRECTIVE};

impl<'a> Parser<'a> {
    /// `@base <iri> .`
    pub(super) fn parse_base(&mut self) -> Result<()> {
        self.reader.cursor_mut().advance(BASE_DIRECTIVE.len());
        match self.next_token()? {
            Token::Iri(iri) => {
                debug!(base = %iri, "base IRI set");
                self.namespaces.base = iri;
            }
            other => {
                return Err(self.syntax(format!("{BASE_DIRECTIVE} expects an IRI, found {other}")))
            }
        }
        self.expect_directive_end(BASE_DIRECTIVE)
    }

    /// `@prefix label: <iri> .`
    pub(super) fn parse_prefix(&mut self) -> Result<()> {
        self.reader.cursor_mut().advance(PREFIX_DIRECTIVE.len());
        let label = match self.next_token()? {
            Token::PrefixLabel(label) => label,
            other => {
                return Err(self.syntax(format!(
                    "{PREFIX_DIRECTIVE} expects a `label:`, found {other}"
                )))
            }
        };
        let namespace = match self.next_token()? {
            Token::Iri(iri) => iri,
            other => {
                return Err(self.syntax(format!(
                    "{PREFIX_DIRECTIVE} {label} expects an IRI, found {other}"
                )))
            }
        };
        debug!(label = %label, namespace = %namespace, "prefix bound");
        self.namespaces.prefixes.insert(&label, &namespace);
        self.expect_directive_end(PREFIX_DIRECTIVE)
    }

    fn expect_directive_end(&mut self, directive: &str) -> Result<()> {
        match self.next_token()? {
            Token::End => Ok(()),
            other => Err(self.syntax(format!(
                "too many arguments to {directive}: expected `.`, found {other}"
            ))),
        }
    }

    pub(super) fn syntax(&self, message: String) -> ParseError {
        ParseError::syntax(self.reader.token_start(), message)
    }
}
