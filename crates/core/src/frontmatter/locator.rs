//! Locating the frontmatter block and splicing a new one onto a body.

use super::encoder::{EncodeError, EncodeOptions, encode_with};
use super::value::Mapping;
use std::ops::Range;

/// Fence line opening and closing a frontmatter block.
pub const FENCE: &str = "---";

/// Result of [`locate`]: borrowed views into the original document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<'a> {
    /// Text strictly between the fence lines, `None` when there is no block.
    pub raw_block: Option<&'a str>,
    /// Everything after the closing fence line, or the whole document.
    pub body: &'a str,
    /// Byte range of the block including both fence lines.
    pub span: Option<Range<usize>>,
}

impl Located<'_> {
    pub fn is_present(&self) -> bool {
        self.raw_block.is_some()
    }
}

/// Find the frontmatter block at the start of `content`.
///
/// The opening fence must be the very first line. A `---` further down is a
/// horizontal rule in the body, not frontmatter.
///
/// ```
/// use docfront_core::frontmatter::locate;
///
/// let doc = locate("---\ntitle: Hi\n---\n# Body\n");
/// assert_eq!(doc.raw_block, Some("title: Hi"));
/// assert_eq!(doc.body, "# Body\n");
/// ```
pub fn locate(content: &str) -> Located<'_> {
    let absent = Located { raw_block: None, body: content, span: None };

    let Some(block_start) = strip_fence_line(content) else {
        return absent;
    };

    let mut offset = block_start;
    while offset < content.len() {
        let rest = &content[offset..];
        let (line, terminator) = match rest.find('\n') {
            Some(nl) => (&rest[..nl], nl + 1),
            None => (rest, rest.len()),
        };
        if line.strip_suffix('\r').unwrap_or(line) == FENCE {
            let raw = &content[block_start..offset];
            let raw = raw
                .strip_suffix('\n')
                .map(|r| r.strip_suffix('\r').unwrap_or(r))
                .unwrap_or(raw);
            let end = offset + terminator;
            return Located { raw_block: Some(raw), body: &content[end..], span: Some(0..end) };
        }
        offset += terminator;
    }

    absent
}

/// Byte offset just past an opening fence line, if `content` starts with one.
fn strip_fence_line(content: &str) -> Option<usize> {
    let rest = content.strip_prefix(FENCE)?;
    if rest.starts_with('\n') {
        Some(FENCE.len() + 1)
    } else if rest.starts_with("\r\n") {
        Some(FENCE.len() + 2)
    } else {
        None
    }
}

/// Rebuild a document from a value tree and a body with default options.
pub fn splice(map: &Mapping, body: &str) -> Result<String, EncodeError> {
    splice_with(map, body, &EncodeOptions::default())
}

/// Rebuild a document: fence, encoded block, fence, body.
///
/// The whole wrapper is regenerated, so only the value content of the
/// original block survives, not its formatting.
pub fn splice_with(map: &Mapping, body: &str, opts: &EncodeOptions) -> Result<String, EncodeError> {
    let block = encode_with(map, opts)?;
    Ok(format!("{FENCE}\n{block}\n{FENCE}\n{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::decoder::decode;

    #[test]
    fn locates_block_and_body() {
        let text = "---\ntitle: Hello\n---\n# Content";
        let found = locate(text);
        assert!(found.is_present());
        assert_eq!(found.raw_block, Some("title: Hello"));
        assert_eq!(found.body, "# Content");
        assert_eq!(found.span, Some(0..21));
    }

    #[test]
    fn fence_not_on_first_line_is_absent() {
        let text = "# Title\n---\nbody";
        let found = locate(text);
        assert!(!found.is_present());
        assert_eq!(found.body, text);
        assert_eq!(found.span, None);
    }

    #[test]
    fn leading_blank_line_is_absent() {
        let text = "\n---\ntitle: x\n---\n";
        assert!(!locate(text).is_present());
    }

    #[test]
    fn unterminated_block_is_absent() {
        let text = "---\ntitle: x\nno closing fence";
        let found = locate(text);
        assert!(!found.is_present());
        assert_eq!(found.body, text);
    }

    #[test]
    fn empty_block() {
        let found = locate("---\n---\nbody");
        assert_eq!(found.raw_block, Some(""));
        assert_eq!(found.body, "body");
    }

    #[test]
    fn closing_fence_at_end_of_document() {
        let found = locate("---\na: 1\n---");
        assert_eq!(found.raw_block, Some("a: 1"));
        assert_eq!(found.body, "");
    }

    #[test]
    fn fence_must_be_exact() {
        assert!(!locate("----\na: 1\n----\n").is_present());
        let found = locate("---\na: 1\n--- \nb: 2\n---\nbody");
        assert_eq!(found.raw_block, Some("a: 1\n--- \nb: 2"));
    }

    #[test]
    fn crlf_document() {
        let found = locate("---\r\ntitle: x\r\n---\r\nbody\r\n");
        assert_eq!(found.raw_block, Some("title: x"));
        assert_eq!(found.body, "body\r\n");
    }

    #[test]
    fn splice_rebuilds_wrapper() {
        let original = "---\ntitle:    Spaced\nweight:   2\n---\n\n# Body\n";
        let found = locate(original);
        let mut map = decode(found.raw_block.unwrap());
        map.insert("sidebarTitle", "Overview");

        let rebuilt = splice(&map, found.body).unwrap();
        assert_eq!(rebuilt, "---\ntitle: Spaced\nweight: 2\nsidebarTitle: Overview\n---\n\n# Body\n");
    }

    #[test]
    fn splice_empty_mapping_relocates() {
        let rebuilt = splice(&Mapping::new(), "body").unwrap();
        assert_eq!(rebuilt, "---\n\n---\nbody");
        let found = locate(&rebuilt);
        assert_eq!(found.raw_block, Some(""));
        assert_eq!(found.body, "body");
    }
}
