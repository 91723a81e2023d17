//! Frontmatter location, decoding, modification, and encoding.
//!
//! This module provides functionality to:
//! - Locate the `---` fenced block at the top of a document
//! - Decode the block into an ordered [`Mapping`] without a YAML dependency
//! - Modify fields (set, toggle, increment, append)
//! - Encode the mapping back and splice it onto the original body

pub mod decoder;
pub mod encoder;
pub mod locator;
pub mod modifier;
pub mod types;
pub mod value;

pub use decoder::{decode, infer_scalar};
pub use encoder::{EncodeError, EncodeOptions, encode, encode_with};
pub use locator::{FENCE, Located, locate, splice, splice_with};
pub use modifier::{FrontmatterModifyError, apply_ops};
pub use types::{FrontmatterOp, FrontmatterOpType, FrontmatterOps, ParsedDocument};
pub use value::{Mapping, Value};

/// Split a document into decoded frontmatter and body.
///
/// Never fails: a missing block yields `frontmatter: None` and the whole text
/// as body, and a malformed block decodes as far as it can.
pub fn parse(content: &str) -> ParsedDocument {
    let located = locate(content);
    ParsedDocument {
        frontmatter: located.raw_block.map(decode),
        body: located.body.to_string(),
    }
}

/// Serialize a parsed document back to text with default options.
pub fn serialize(doc: &ParsedDocument) -> Result<String, EncodeError> {
    serialize_with(doc, &EncodeOptions::default())
}

/// Serialize a parsed document; a document without frontmatter is its body.
pub fn serialize_with(doc: &ParsedDocument, opts: &EncodeOptions) -> Result<String, EncodeError> {
    match &doc.frontmatter {
        Some(fm) => splice_with(fm, &doc.body, opts),
        None => Ok(doc.body.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_frontmatter() {
        let content = "# Hello\n\nSome content";
        let result = parse(content);
        assert!(result.frontmatter.is_none());
        assert_eq!(result.body, content);
        assert_eq!(serialize(&result).unwrap(), content);
    }

    #[test]
    fn parse_frontmatter_with_multiple_fields() {
        let content = "---\ntitle: Test\ndate: 2024-01-15\ntags:\n  - rust\n  - cli\n---\n\nBody";
        let result = parse(content);
        let fm = result.frontmatter.unwrap();
        assert_eq!(fm.get("title").and_then(|v| v.as_str()), Some("Test"));
        assert_eq!(fm.get("date").and_then(|v| v.as_str()), Some("2024-01-15"));
        assert_eq!(fm.get("tags").and_then(|v| v.as_sequence()).map(<[Value]>::len), Some(2));
        assert_eq!(result.body, "\nBody");
    }

    #[test]
    fn roundtrip_frontmatter() {
        let original = "---\ntitle: Hello\ncount: 42\n---\n\n# Body";
        let parsed = parse(original);
        let serialized = serialize(&parsed).unwrap();
        assert_eq!(serialized, original);

        let reparsed = parse(&serialized);
        assert_eq!(reparsed, parsed);
    }
}
