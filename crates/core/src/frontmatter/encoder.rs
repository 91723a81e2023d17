//! Encoder from a value tree back to frontmatter block text.

use super::decoder::{entry_key, infer_scalar};
use super::value::{Mapping, Value};
use thiserror::Error;

/// Errors for values the block dialect cannot represent.
///
/// Each variant carries the dotted path of the offending value
/// (`nav.items[2].title`).
#[derive(Debug, Error, PartialEq)]
pub enum EncodeError {
    #[error("key {key:?} at '{path}' cannot be encoded: {reason}")]
    InvalidKey { path: String, key: String, reason: &'static str },

    #[error("string at '{0}' contains a line break")]
    MultilineString(String),

    #[error("null at '{0}' has no block representation")]
    Null(String),

    #[error("empty sequence at '{0}' has no block representation")]
    EmptySequence(String),

    #[error("float at '{0}' is not finite")]
    NonFiniteFloat(String),

    #[error("indent width must be at least one space")]
    ZeroIndent,

    #[error("quote character must be '\"' or '\\'', got {0:?}")]
    InvalidQuote(char),
}

/// Formatting choices for [`encode_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Quote wrapped around strings that need it.
    pub quote: char,
    /// Characters that force quoting when they lead a string.
    pub special_leading: Vec<char>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            quote: '"',
            special_leading: vec![
                '#', '!', '-', '?', '@', '&', '*', '%', '{', '}', '[', ']',
            ],
        }
    }
}

impl EncodeOptions {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Whether `s` must be quoted to survive a decode unchanged.
    pub fn needs_quotes(&self, s: &str) -> bool {
        s.is_empty()
            || s.contains(':')
            || s.trim() != s
            || s.starts_with(['"', '\''])
            || s.starts_with(self.special_leading.as_slice())
            || infer_scalar(s) != Value::String(s.to_string())
    }
}

/// Encode a mapping with the default two-space options.
pub fn encode(map: &Mapping) -> Result<String, EncodeError> {
    encode_with(map, &EncodeOptions::default())
}

/// Encode a mapping into block text (no fences, no trailing newline).
pub fn encode_with(map: &Mapping, opts: &EncodeOptions) -> Result<String, EncodeError> {
    if opts.indent == 0 {
        return Err(EncodeError::ZeroIndent);
    }
    if !matches!(opts.quote, '"' | '\'') {
        return Err(EncodeError::InvalidQuote(opts.quote));
    }
    let mut emitter = Emitter { opts, lines: Vec::new() };
    emitter.mapping(map, 0, "")?;
    Ok(emitter.lines.join("\n"))
}

struct Emitter<'o> {
    opts: &'o EncodeOptions,
    lines: Vec<String>,
}

impl Emitter<'_> {
    fn pad(&self, level: usize) -> String {
        " ".repeat(level * self.opts.indent)
    }

    fn mapping(&mut self, map: &Mapping, level: usize, path: &str) -> Result<(), EncodeError> {
        let pad = self.pad(level);
        for (key, value) in map.iter() {
            let here = if path.is_empty() { key.to_string() } else { format!("{path}.{key}") };
            let key = self.key(key, &here)?;
            match value {
                Value::Mapping(inner) => {
                    self.lines.push(format!("{pad}{key}:"));
                    self.mapping(inner, level + 1, &here)?;
                }
                Value::Sequence(items) => {
                    if items.is_empty() {
                        return Err(EncodeError::EmptySequence(here));
                    }
                    self.lines.push(format!("{pad}{key}:"));
                    self.sequence(items, level + 1, &here)?;
                }
                scalar => {
                    let text = self.scalar(scalar, &here)?;
                    self.lines.push(format!("{pad}{key}: {text}"));
                }
            }
        }
        Ok(())
    }

    fn sequence(&mut self, items: &[Value], level: usize, path: &str) -> Result<(), EncodeError> {
        let pad = self.pad(level);
        for (i, item) in items.iter().enumerate() {
            let here = format!("{path}[{i}]");
            match item {
                Value::Mapping(inner) => {
                    self.lines.push(format!("{pad}-"));
                    self.mapping(inner, level + 1, &here)?;
                }
                Value::Sequence(inner) => {
                    if inner.is_empty() {
                        return Err(EncodeError::EmptySequence(here));
                    }
                    self.lines.push(format!("{pad}-"));
                    self.sequence(inner, level + 1, &here)?;
                }
                scalar => {
                    let text = self.scalar(scalar, &here)?;
                    self.lines.push(format!("{pad}- {text}"));
                }
            }
        }
        Ok(())
    }

    fn key(&self, key: &str, path: &str) -> Result<String, EncodeError> {
        let invalid = |reason| EncodeError::InvalidKey {
            path: path.to_string(),
            key: key.to_string(),
            reason,
        };
        if key.contains(['\n', '\r']) {
            return Err(invalid("contains a line break"));
        }
        let needs_quotes = key.contains(':')
            || key.trim() != key
            || key.starts_with(['"', '\''])
            || key.starts_with("- ");
        if !needs_quotes {
            return Ok(key.to_string());
        }
        let other = if self.opts.quote == '"' { '\'' } else { '"' };
        [
            format!("{q}{key}{q}", q = self.opts.quote),
            format!("{other}{key}{other}"),
            key.to_string(),
        ]
        .into_iter()
        .find(|candidate| entry_key(&format!("{candidate}:")) == Some(key))
        .ok_or_else(|| invalid("no quoting reads back as the same key"))
    }

    fn scalar(&self, value: &Value, path: &str) -> Result<String, EncodeError> {
        match value {
            Value::Null => Err(EncodeError::Null(path.to_string())),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Integer(n) => Ok(n.to_string()),
            Value::Float(f) if !f.is_finite() => {
                Err(EncodeError::NonFiniteFloat(path.to_string()))
            }
            // Debug keeps a `.` or exponent so `1.0` does not come back as an integer.
            Value::Float(f) => Ok(format!("{f:?}")),
            Value::String(s) if s.contains(['\n', '\r']) => {
                Err(EncodeError::MultilineString(path.to_string()))
            }
            Value::String(s) if self.opts.needs_quotes(s) => {
                Ok(format!("{q}{s}{q}", q = self.opts.quote))
            }
            Value::String(s) => Ok(s.clone()),
            Value::Sequence(_) | Value::Mapping(_) => {
                unreachable!("containers are emitted by mapping() and sequence()")
            }
        }
    }
}
