//! RDF vocabulary constants used while parsing and serializing.
//!
//! - `rdf:` / `rdfs:` / `xsd:` -- the W3C namespaces
//! - `ns:` -- the Freebase RDF namespace used by dump normalization

/// Standard RDF/RDFS/XSD namespace URIs
pub mod standard {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// Turtle keywords and shorthands understood by the parser.
pub mod turtle {
    /// Bare predicate token that abbreviates `rdf:type`.
    pub const TYPE_SHORTHAND: &str = "a";
    pub const BASE_DIRECTIVE: &str = "@base";
    pub const PREFIX_DIRECTIVE: &str = "@prefix";
}

/// Freebase RDF service (`ns:` prefix in its dumps)
pub mod freebase {
    pub const PREFIX: &str = "ns";
    pub const NS: &str = "https://www.googleapis.com/freebase/v1/rdf/";
}
