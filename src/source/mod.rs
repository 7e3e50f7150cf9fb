//! Pre-parse normalization of documents fetched from remote sources.

pub mod freebase;
