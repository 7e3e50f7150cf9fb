//! Parse Turtle-subset RDF documents into ordered triples.
//!
//! ```
//! let triples = ttl2triples::parse(
//!     "@prefix ex: <http://example.org/> .\n ex:alice a ex:Person ; ex:name \"Alice\"@en .",
//! )
//! .unwrap();
//! assert_eq!(triples.len(), 2);
//! assert_eq!(triples[0].predicate, "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
//! assert_eq!(triples[1].lang, "en");
//! ```

pub mod emitter;
pub mod model;
pub mod parser;
pub mod source;

pub use model::triple::{ObjectKind, Triple};
pub use parser::{parse, parse_bytes, parse_with, DatatypePolicy, ParseError, ParserOptions};
