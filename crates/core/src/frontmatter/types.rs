//! Frontmatter document and operation types.

use super::value::{Mapping, Value};

/// A document split into decoded frontmatter and body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    /// Decoded frontmatter (if present).
    pub frontmatter: Option<Mapping>,
    /// The markdown body (everything after the closing fence).
    pub body: String,
}

/// Frontmatter operations specification.
/// Supports both plain key-value assignments and explicit operations.
#[derive(Debug, Clone)]
pub enum FrontmatterOps {
    /// Plain form: every pair implies "set", applied in order.
    Simple(Vec<(String, Value)>),
    /// List of explicit operations.
    Operations(Vec<FrontmatterOp>),
}

/// A single frontmatter modification operation.
#[derive(Debug, Clone)]
pub struct FrontmatterOp {
    /// Field name to modify.
    pub field: String,
    /// Operation type.
    pub op: FrontmatterOpType,
    /// Value for set/append/increment operations (supports {{var}} in string values).
    pub value: Option<Value>,
}

impl FrontmatterOp {
    pub fn set(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { field: field.into(), op: FrontmatterOpType::Set, value: Some(value.into()) }
    }
}

/// Type of frontmatter operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterOpType {
    /// Set field to value (creates if missing).
    Set,
    /// Toggle boolean field.
    Toggle,
    /// Increment numeric field.
    Increment,
    /// Append to list field.
    Append,
}
