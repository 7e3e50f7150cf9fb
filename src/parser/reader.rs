//! Object reader: classifies the next lexical unit and moves past it.

use std::fmt;

use tracing::debug;

use super::cursor::Cursor;
use super::error::{ParseError, Result};
use super::prefixes::Namespaces;
use super::{DatatypePolicy, ParserOptions};

/// How a `[ ... ]` blank-node bag was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// `];` -- more predicates follow for the enclosing subject.
    Predicate,
    /// `].` -- the enclosing statement ends too.
    Statement,
}

/// One lexical unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Quoted string, decoded, with an optional language tag (empty if none).
    Literal { value: String, lang: String },
    /// `<...>` already resolved against the base, or an expanded `prefix:local`.
    Iri(String),
    /// `.`
    End,
    /// `;`
    PredicateSep,
    /// `,`
    ObjectSep,
    /// A bare `label:` as used by `@prefix`.
    PrefixLabel(String),
    /// `[`
    BagOpen,
    /// `];` or `].`
    BagClose(Terminator),
    /// Bare token with no classification (`a`, unbound prefixed names, ...).
    Unknown(String),
    /// End of input.
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal { value, .. } => write!(f, "literal \"{value}\""),
            Token::Iri(iri) => write!(f, "IRI <{iri}>"),
            Token::End => f.write_str("`.`"),
            Token::PredicateSep => f.write_str("`;`"),
            Token::ObjectSep => f.write_str("`,`"),
            Token::PrefixLabel(label) => write!(f, "prefix label `{label}`"),
            Token::BagOpen => f.write_str("`[`"),
            Token::BagClose(Terminator::Predicate) => f.write_str("`];`"),
            Token::BagClose(Terminator::Statement) => f.write_str("`].`"),
            Token::Unknown(word) => write!(f, "unrecognized token `{word}`"),
            Token::Eof => f.write_str("end of input"),
        }
    }
}

/// Lexer over a single document.
pub struct ObjectReader<'a> {
    cursor: Cursor<'a>,
    options: &'a ParserOptions,
    token_start: usize,
}

impl<'a> ObjectReader<'a> {
    pub fn new(input: &'a str, options: &'a ParserOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            options,
            token_start: 0,
        }
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    /// Offset where the most recently read token began.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Read the next token, skipping whitespace and comments before it.
    pub fn next_token(&mut self, ns: &Namespaces) -> Result<Token> {
        self.cursor.skip_whitespace();
        self.token_start = self.cursor.position();
        let Some(b) = self.cursor.peek() else {
            return Ok(Token::Eof);
        };
        match b {
            b'"' | b'\'' => self.read_literal(b, ns),
            b'<' => self.read_iri(ns),
            b'.' => self.punct(1, Token::End),
            b';' => self.punct(1, Token::PredicateSep),
            b',' => self.punct(1, Token::ObjectSep),
            b']' => match self.cursor.next_significant(1) {
                Some((at, b';')) => self.bag_close(at, Terminator::Predicate),
                Some((at, b'.')) => self.bag_close(at, Terminator::Statement),
                _ => Ok(self.read_bare(ns)),
            },
            _ => Ok(self.read_bare(ns)),
        }
    }

    fn punct(&mut self, len: usize, token: Token) -> Result<Token> {
        self.cursor.advance(len);
        Ok(token)
    }

    fn bag_close(&mut self, terminator_at: usize, terminator: Terminator) -> Result<Token> {
        self.cursor.seek(terminator_at + 1);
        Ok(Token::BagClose(terminator))
    }

    fn read_iri(&mut self, ns: &Namespaces) -> Result<Token> {
        let start = self.cursor.position();
        let Some(len) = self.cursor.rest().find('>') else {
            return Err(ParseError::syntax(start, "unterminated IRI"));
        };
        let reference = self.cursor.span(start + 1, start + len);
        self.cursor.advance(len + 1);
        Ok(Token::Iri(ns.resolve(reference)))
    }

    fn read_literal(&mut self, quote: u8, ns: &Namespaces) -> Result<Token> {
        let start = self.cursor.position();
        let rest = self.cursor.rest().as_bytes();
        let mut i = 1;
        loop {
            match rest.get(i) {
                None => return Err(ParseError::syntax(start, "unterminated string literal")),
                Some(b'\\') => i += 2,
                Some(&c) if c == quote => break,
                Some(_) => i += 1,
            }
        }
        let raw = self.cursor.span(start + 1, start + i);
        let value = unescape(raw).map_err(|msg| ParseError::syntax(start, msg))?;
        self.cursor.seek(start + i + 1);

        let mut lang = String::new();
        if self.cursor.peek() == Some(b'@') {
            self.cursor.advance(1);
            lang = self.cursor.take_word(&self.options.stop_bytes).to_string();
        } else if self.cursor.starts_with("^^") {
            self.cursor.advance(2);
            self.read_datatype(ns)?;
        }
        Ok(Token::Literal { value, lang })
    }

    /// Consume the datatype after `^^`. The datatype itself is not kept.
    fn read_datatype(&mut self, ns: &Namespaces) -> Result<()> {
        let at = self.cursor.position();
        if self.options.datatypes == DatatypePolicy::Reject {
            return Err(ParseError::syntax(at, "typed literals are not supported"));
        }
        let datatype = if self.cursor.peek() == Some(b'<') {
            self.read_iri(ns)?
        } else {
            self.read_bare(ns)
        };
        match datatype {
            Token::Iri(iri) => {
                debug!(datatype = %iri, "discarding literal datatype");
                Ok(())
            }
            other => Err(ParseError::syntax(
                at,
                format!("literal datatype must be IRI, found {other}"),
            )),
        }
    }

    fn read_bare(&mut self, ns: &Namespaces) -> Token {
        let word = self.cursor.peek_word(&self.options.stop_bytes);
        if let Some(i) = word.find('[') {
            self.cursor.advance(i + 1);
            return Token::BagOpen;
        }
        self.cursor.advance(word.len());
        if let Some(i) = word.find(':') {
            if i + 1 == word.len() {
                return Token::PrefixLabel(word.to_string());
            }
            let (label, local) = word.split_at(i + 1);
            if let Some(iri) = ns.prefixes.expand(label, local) {
                return Token::Iri(iri);
            }
        }
        Token::Unknown(word.to_string())
    }
}

/// Decode backslash escapes in a quoted string body.
fn unescape(raw: &str) -> std::result::Result<String, String> {
    if !raw.contains('\\') {
        return Ok(raw.to_string());
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let decoded = match chars.next() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('b') => '\u{8}',
            Some('f') => '\u{c}',
            Some('"') => '"',
            Some('\'') => '\'',
            Some('\\') => '\\',
            Some('u') => hex_char(&mut chars, 4)?,
            Some('U') => hex_char(&mut chars, 8)?,
            Some(other) => return Err(format!("invalid escape sequence `\\{other}`")),
            None => return Err("dangling `\\` in string literal".to_string()),
        };
        out.push(decoded);
    }
    Ok(out)
}

fn hex_char(chars: &mut std::str::Chars<'_>, digits: usize) -> std::result::Result<char, String> {
    let hex: String = chars.by_ref().take(digits).collect();
    if hex.len() != digits {
        return Err(format!("truncated unicode escape `{hex}`"));
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| format!("invalid unicode escape `{hex}`"))
}
