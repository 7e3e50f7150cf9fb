//! Normalize Freebase RDF dumps into the Turtle subset the parser reads.
//!
//! A dump lists one predicate/object pair per line under its subject:
//!
//! ```text
//!     ns:type.object.name    "Spider-Man"@en;
//!     ns:type.object.type    ns:film.film_character;
//! ```
//!
//! Only those indented `ns:` lines are kept. Each becomes a full
//! `<subject> <predicate> object .` statement.

use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::emitter::ntriples::literal_term;
use crate::model::ontology::freebase;

/// Indentation plus prefix that marks a predicate line.
const PREDICATE_LINE: &str = "    ns:";
/// Predicate lines in the `rdf` sub-namespace carry dump metadata.
const METADATA_LINE: &str = "    ns:rdf:";
/// Separator between predicate and object on a line.
const COLUMN_SEPARATOR: &str = "    ";

/// Subject IRI for a resource key such as `/m/02mjmr`.
pub fn subject_iri(key: &str) -> String {
    format!("{}{}", freebase::NS.trim_end_matches('/'), key)
}

/// Convert a dump for `subject` into parseable statements.
///
/// `namespace` replaces the dump's `ns:` prefix; dots in local names become
/// path separators (`ns:m.02mjmr` -> `{namespace}m/02mjmr`).
pub fn normalize_dump(subject: &str, dump: &str, namespace: &str) -> String {
    let mut out = String::new();
    for line in dump.lines() {
        if !line.starts_with(PREDICATE_LINE) || line.starts_with(METADATA_LINE) {
            continue;
        }
        let line = line.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n' | ';' | '.'));
        let Some((predicate, object)) = line.split_once(COLUMN_SEPARATOR) else {
            debug!(line, "skipping dump line without an object");
            continue;
        };
        let Some(predicate) = Term::parse(predicate.trim(), namespace).into_iri() else {
            debug!(line, "skipping dump line with a non-IRI predicate");
            continue;
        };
        let object = Term::parse(object.trim(), namespace).to_turtle();
        out.push_str(&format!("<{subject}> <{predicate}> {object} .\n"));
    }
    out
}

/// One value column of a dump line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Iri(String),
    Literal { value: String, lang: String },
}

impl Term {
    pub fn parse(raw: &str, namespace: &str) -> Self {
        if let Some(local) = raw.strip_prefix("ns:") {
            return Term::Iri(format!("{namespace}{}", local.replace('.', "/")));
        }
        if let Some(inner) = raw.strip_prefix('<').and_then(|r| r.strip_suffix('>')) {
            return Term::Iri(inner.to_string());
        }
        if let Some(body) = raw.strip_prefix('"') {
            if let Some(close) = body.rfind('"') {
                let lang = body[close + 1..].strip_prefix('@').unwrap_or("");
                return Term::Literal {
                    value: query_unescape(&body[..close]),
                    lang: lang.to_string(),
                };
            }
        }
        Term::Literal {
            value: raw.to_string(),
            lang: String::new(),
        }
    }

    pub fn into_iri(self) -> Option<String> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal { .. } => None,
        }
    }

    fn to_turtle(&self) -> String {
        match self {
            Term::Iri(iri) => format!("<{iri}>"),
            Term::Literal { value, lang } => literal_term(value, lang),
        }
    }
}

/// Decode a URL query component: `+` is a space, `%XX` a byte.
/// Text that does not decode to UTF-8 is kept as-is.
fn query_unescape(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match percent_decode_str(&spaced).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}
