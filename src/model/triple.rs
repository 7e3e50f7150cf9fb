//! The triple record produced by the parser.

use serde::{Deserialize, Serialize};

/// What the object position of a [`Triple`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Iri,
    BlankNode,
    Literal,
}

/// A subject-predicate-object statement.
///
/// Serialized field names match the fields the triple-store ingestion
/// endpoint accepts (`subj`, `pred`, `obj`, `type`, `lang`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    #[serde(rename = "subj")]
    pub subject: String,
    #[serde(rename = "pred")]
    pub predicate: String,
    #[serde(rename = "obj")]
    pub object: String,
    /// Reserved; datatype annotations are not carried through.
    #[serde(rename = "type")]
    pub datatype: String,
    /// Language tag, empty when absent.
    pub lang: String,
    pub kind: ObjectKind,
}

impl Triple {
    /// Triple whose object is an IRI.
    pub fn iri(subject: &str, predicate: &str, object: &str) -> Self {
        Self::with_kind(subject, predicate, object, "", ObjectKind::Iri)
    }

    /// Triple whose object is a blank node synthesized for a `[ ... ]` bag.
    pub fn blank_node(subject: &str, predicate: &str, node: &str) -> Self {
        Self::with_kind(subject, predicate, node, "", ObjectKind::BlankNode)
    }

    /// Triple whose object is literal text with an optional language tag.
    pub fn literal(subject: &str, predicate: &str, value: &str, lang: &str) -> Self {
        Self::with_kind(subject, predicate, value, lang, ObjectKind::Literal)
    }

    fn with_kind(
        subject: &str,
        predicate: &str,
        object: &str,
        lang: &str,
        kind: ObjectKind,
    ) -> Self {
        Self {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object: object.to_string(),
            datatype: String::new(),
            lang: lang.to_string(),
            kind,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.kind == ObjectKind::Literal
    }
}
