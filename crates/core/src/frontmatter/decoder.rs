//! Indentation-driven decoder for frontmatter block text.
//!
//! The decoder is total: it never fails. Lines it cannot place are skipped and
//! the rest of the block still decodes, so a batch over many documents is never
//! stopped by one malformed page.
//!
//! Structure comes only from leading whitespace. Every `key:` with an empty
//! value opens a container whose shape is unknown until its first child line
//! arrives: a `- ` child turns it into a sequence, a `key:` child into a
//! mapping, and no children at all leaves an empty mapping.

use super::value::{Mapping, Value};
use tracing::trace;

/// Decode raw block text (the text between the fences) into a mapping.
pub fn decode(raw_block: &str) -> Mapping {
    let mut stack = vec![Frame::root()];

    for (line_no, raw) in raw_block.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let width = raw.chars().take_while(|c| c.is_whitespace()).count();
        let line = Line::classify(trimmed);

        ascend(&mut stack, width, line.is_item());

        let Some(top) = stack.last_mut() else {
            break;
        };

        match line {
            Line::Item(None) => {
                if top.open_item(width) {
                    stack.push(Frame::child(width, Slot::Item));
                } else {
                    trace!(line = line_no + 1, "sequence item under a mapping, skipping");
                }
            }
            Line::Item(Some(payload)) => {
                if !top.push_item(width, item_scalar(payload)) {
                    trace!(line = line_no + 1, "sequence item under a mapping, skipping");
                }
            }
            Line::Entry { key, value } if value.is_empty() => {
                if top.container.as_mapping().is_some() {
                    stack.push(Frame::child(width, Slot::Key(key.to_string())));
                } else {
                    trace!(line = line_no + 1, key, "key inside a sequence, skipping");
                }
            }
            Line::Entry { key, value } => match top.container.as_mapping() {
                Some(map) => {
                    map.insert(key, infer_scalar(value));
                }
                None => trace!(line = line_no + 1, key, "key inside a sequence, skipping"),
            },
            Line::Inert => trace!(line = line_no + 1, "unrecognised line, skipping"),
        }
    }

    while stack.len() > 1 {
        close(&mut stack);
    }

    match stack.pop().map(|f| f.container) {
        Some(Container::Mapping(map)) => map,
        Some(Container::Sequence(_)) => {
            trace!("block root is a sequence, using an empty mapping");
            Mapping::new()
        }
        Some(Container::Pending) | None => Mapping::new(),
    }
}

/// Infer the type of a scalar.
///
/// Tried in order: boolean, base-10 integer, finite float, quoted string,
/// literal string. Integers too large for `i64` become floats.
pub fn infer_scalar(raw: &str) -> Value {
    let v = raw.trim();
    if v.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if v.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Ok(n) = v.parse::<i64>() {
        return Value::Integer(n);
    }
    if let Ok(f) = v.parse::<f64>()
        && f.is_finite()
    {
        return Value::Float(f);
    }
    match unquote(v) {
        Some(inner) => Value::String(inner.to_string()),
        None => Value::String(v.to_string()),
    }
}

/// Strip one matching pair of surrounding `"` or `'`.
pub(crate) fn unquote(s: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|q| {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            Some(&s[1..s.len() - 1])
        } else {
            None
        }
    })
}

/// Key of a `key: value` line as the decoder reads it.
pub(crate) fn entry_key(line: &str) -> Option<&str> {
    match Line::classify(line.trim()) {
        Line::Entry { key, .. } => Some(key),
        _ => None,
    }
}

/// Payload of a `- item` line.
///
/// A colon makes the payload opaque: it is kept as literal text and never
/// parsed as a nested key.
fn item_scalar(payload: &str) -> Value {
    if unquote(payload).is_none() && payload.contains(':') {
        return Value::String(payload.to_string());
    }
    infer_scalar(payload)
}

/// Ascend out of every block the line at `width` no longer belongs to.
fn ascend(stack: &mut Vec<Frame>, width: usize, is_item: bool) {
    while let Some(top) = stack.last() {
        let Some(indent) = top.indent else {
            break;
        };
        if width > indent {
            break;
        }
        if width == indent && is_item && top.accepts_compact_items() {
            break;
        }
        close(stack);
    }
}

/// Pop the top frame and attach its container to the parent.
fn close(stack: &mut Vec<Frame>) {
    let Some(frame) = stack.pop() else {
        return;
    };
    let Some(parent) = stack.last_mut() else {
        return;
    };
    let value = frame.container.into_value();
    match (frame.slot, &mut parent.container) {
        (Slot::Key(key), Container::Mapping(map)) => {
            map.insert(key, value);
        }
        (Slot::Item, Container::Sequence(seq)) => seq.push(value),
        _ => {}
    }
}

#[derive(Debug)]
enum Line<'a> {
    /// `-` alone (`None`) or `- payload`.
    Item(Option<&'a str>),
    Entry { key: &'a str, value: &'a str },
    Inert,
}

impl<'a> Line<'a> {
    fn classify(trimmed: &'a str) -> Self {
        if trimmed == "-" {
            return Line::Item(None);
        }
        if let Some(payload) = trimmed.strip_prefix("- ") {
            let payload = payload.trim();
            return Line::Item((!payload.is_empty()).then_some(payload));
        }
        match key_colon(trimmed) {
            Some(pos) => {
                let key = trimmed[..pos].trim();
                Line::Entry {
                    key: unquote(key).unwrap_or(key),
                    value: trimmed[pos + 1..].trim(),
                }
            }
            None => Line::Inert,
        }
    }

    fn is_item(&self) -> bool {
        matches!(self, Line::Item(_))
    }
}

/// Position of the colon separating key from value.
///
/// A quoted key is skipped over so a colon inside it does not split the line.
fn key_colon(line: &str) -> Option<usize> {
    let start = match line.chars().next() {
        Some(q @ ('"' | '\'')) => line[1..].find(q).map_or(0, |end| end + 2),
        _ => 0,
    };
    line[start..].find(':').map(|pos| pos + start)
}

#[derive(Debug)]
enum Container {
    /// Opened by `key:` or `-`; shape decided by the first child line.
    Pending,
    Mapping(Mapping),
    Sequence(Vec<Value>),
}

impl Container {
    fn as_mapping(&mut self) -> Option<&mut Mapping> {
        if let Container::Pending = self {
            *self = Container::Mapping(Mapping::new());
        }
        match self {
            Container::Mapping(map) => Some(map),
            _ => None,
        }
    }

    fn as_sequence(&mut self) -> Option<&mut Vec<Value>> {
        if let Container::Pending = self {
            *self = Container::Sequence(Vec::new());
        }
        match self {
            Container::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Container::Pending => Value::Mapping(Mapping::new()),
            Container::Mapping(map) => Value::Mapping(map),
            Container::Sequence(seq) => Value::Sequence(seq),
        }
    }
}

#[derive(Debug)]
enum Slot {
    Root,
    Key(String),
    Item,
}

#[derive(Debug)]
struct Frame {
    /// Indent of the line that opened the frame; `None` for the root.
    indent: Option<usize>,
    slot: Slot,
    container: Container,
    /// Items sit at the same indent as their key (`tags:\n- a`).
    compact: bool,
}

impl Frame {
    fn root() -> Self {
        Self { indent: None, slot: Slot::Root, container: Container::Pending, compact: false }
    }

    fn child(indent: usize, slot: Slot) -> Self {
        Self { indent: Some(indent), slot, container: Container::Pending, compact: false }
    }

    fn accepts_compact_items(&self) -> bool {
        matches!(self.slot, Slot::Key(_))
            && match self.container {
                Container::Pending => true,
                Container::Sequence(_) => self.compact,
                Container::Mapping(_) => false,
            }
    }

    fn mark_compact(&mut self, width: usize) {
        if self.indent == Some(width) {
            self.compact = true;
        }
    }

    /// Commit to a sequence for a structured `-` item.
    fn open_item(&mut self, width: usize) -> bool {
        if self.container.as_sequence().is_none() {
            return false;
        }
        self.mark_compact(width);
        true
    }

    fn push_item(&mut self, width: usize, value: Value) -> bool {
        let Some(seq) = self.container.as_sequence() else {
            return false;
        };
        seq.push(value);
        self.mark_compact(width);
        true
    }
}
