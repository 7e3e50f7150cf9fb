//! Statement state machine: subject, predicate-object list, object list.

use tracing::debug;

use super::error::{ParseError, Result};
use super::reader::{Terminator, Token};
use super::Parser;
use crate::model::iri;
use crate::model::ontology::turtle::TYPE_SHORTHAND;
use crate::model::triple::Triple;

/// Deepest `[ ... ]` nesting accepted inside one statement.
const MAX_BAG_DEPTH: usize = 1;

/// How a predicate-object list ended.
enum ListEnd {
    /// `.` at statement level.
    Statement,
    /// `];` or `].` closing a bag.
    Bag(Terminator),
}

impl<'a> Parser<'a> {
    pub(super) fn parse_statement(&mut self) -> Result<()> {
        let subject = match self.next_token()? {
            Token::Iri(iri) => iri,
            other => return Err(self.syntax(format!("subject must be IRI, found {other}"))),
        };
        match self.predicate_object_list(&subject, 0)? {
            ListEnd::Statement => Ok(()),
            ListEnd::Bag(_) => Err(ParseError::internal(
                self.reader.token_start(),
                "bag closed at statement level",
            )),
        }
    }

    fn predicate_object_list(&mut self, subject: &str, depth: usize) -> Result<ListEnd> {
        'predicates: loop {
            let predicate = self.read_predicate()?;
            'objects: loop {
                match self.next_token()? {
                    Token::Iri(object) => {
                        self.triples.push(Triple::iri(subject, &predicate, &object));
                    }
                    Token::Literal { value, lang } => {
                        self.triples
                            .push(Triple::literal(subject, &predicate, &value, &lang));
                    }
                    Token::BagOpen => {
                        if depth >= MAX_BAG_DEPTH {
                            return Err(self.syntax(
                                "blank nodes nested more than one level deep are not supported"
                                    .to_string(),
                            ));
                        }
                        let node = iri::blank_node_id(subject, &predicate);
                        debug!(node = %node, "opening blank node");
                        self.triples
                            .push(Triple::blank_node(subject, &predicate, &node));
                        match self.predicate_object_list(&node, depth + 1)? {
                            ListEnd::Bag(Terminator::Predicate) => continue 'predicates,
                            ListEnd::Bag(Terminator::Statement) if depth == 0 => {
                                return Ok(ListEnd::Statement)
                            }
                            ListEnd::Bag(Terminator::Statement) => continue 'predicates,
                            ListEnd::Statement => {
                                return Err(ParseError::internal(
                                    self.reader.token_start(),
                                    "blank node closed with `.`",
                                ))
                            }
                        }
                    }
                    other @ (Token::End
                    | Token::PredicateSep
                    | Token::ObjectSep
                    | Token::PrefixLabel(_)
                    | Token::BagClose(_)
                    | Token::Unknown(_)
                    | Token::Eof) => {
                        return Err(self.syntax(format!("triple needs object, found {other}")))
                    }
                }

                match self.next_token()? {
                    Token::End if depth == 0 => return Ok(ListEnd::Statement),
                    Token::End => {
                        return Err(self.syntax(
                            "blank node must be closed with `];` or `].`".to_string(),
                        ))
                    }
                    Token::PredicateSep => continue 'predicates,
                    Token::ObjectSep => continue 'objects,
                    Token::BagClose(terminator) if depth > 0 => {
                        return Ok(ListEnd::Bag(terminator))
                    }
                    Token::BagClose(_) => {
                        return Err(self.syntax("`]` without a matching `[`".to_string()))
                    }
                    other @ (Token::Literal { .. }
                    | Token::Iri(_)
                    | Token::PrefixLabel(_)
                    | Token::BagOpen
                    | Token::Unknown(_)
                    | Token::Eof) => {
                        return Err(
                            self.syntax(format!("expected control character, found {other}"))
                        )
                    }
                }
            }
        }
    }

    fn read_predicate(&mut self) -> Result<String> {
        match self.next_token()? {
            Token::Iri(iri) => Ok(iri),
            Token::Unknown(word) if word == TYPE_SHORTHAND => Ok(self.options.type_iri.clone()),
            other => Err(self.syntax(format!("predicate must be IRI, found {other}"))),
        }
    }
}
