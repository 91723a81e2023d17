//! Frontmatter modification operations.

use super::types::{FrontmatterOp, FrontmatterOpType, FrontmatterOps};
use super::value::{Mapping, Value};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([a-zA-Z0-9_]+)\}\}").expect("placeholder regex"));

/// Errors that can occur during frontmatter modification.
#[derive(Debug, Error, PartialEq)]
pub enum FrontmatterModifyError {
    #[error("field '{0}' is not a boolean, cannot toggle")]
    NotBoolean(String),
    #[error("field '{0}' is not a number, cannot increment")]
    NotNumber(String),
    #[error("increment step for '{0}' is not a number")]
    InvalidStep(String),
    #[error("field '{0}' is not a list, cannot append")]
    NotList(String),
    #[error("append to '{0}' needs a value")]
    MissingValue(String),
}

/// Apply frontmatter operations to a mapping in place.
pub fn apply_ops(
    fm: &mut Mapping,
    ops: &FrontmatterOps,
    render_ctx: &HashMap<String, String>,
) -> Result<(), FrontmatterModifyError> {
    match ops {
        FrontmatterOps::Simple(pairs) => {
            for (field, value) in pairs {
                fm.insert(field.clone(), render_value(value, render_ctx));
            }
        }
        FrontmatterOps::Operations(op_list) => {
            for op in op_list {
                apply_single_op(fm, op, render_ctx)?;
            }
        }
    }
    Ok(())
}

/// Apply a single frontmatter operation.
fn apply_single_op(
    fm: &mut Mapping,
    op: &FrontmatterOp,
    render_ctx: &HashMap<String, String>,
) -> Result<(), FrontmatterModifyError> {
    match op.op {
        FrontmatterOpType::Set => {
            if let Some(value) = &op.value {
                fm.insert(op.field.clone(), render_value(value, render_ctx));
            }
        }
        FrontmatterOpType::Toggle => match fm.get(&op.field) {
            Some(Value::Bool(b)) => {
                let flipped = !b;
                fm.insert(op.field.clone(), flipped);
            }
            // Default: toggle from false to true
            None => {
                fm.insert(op.field.clone(), true);
            }
            Some(_) => return Err(FrontmatterModifyError::NotBoolean(op.field.clone())),
        },
        FrontmatterOpType::Increment => {
            let step = op.value.clone().unwrap_or(Value::Integer(1));
            if !matches!(step, Value::Integer(_) | Value::Float(_)) {
                return Err(FrontmatterModifyError::InvalidStep(op.field.clone()));
            }
            let next = match (fm.get(&op.field), &step) {
                (None, _) => step.clone(),
                (Some(Value::Integer(n)), Value::Integer(s)) => match n.checked_add(*s) {
                    Some(sum) => Value::Integer(sum),
                    None => Value::Float(*n as f64 + *s as f64),
                },
                (Some(current @ (Value::Integer(_) | Value::Float(_))), _) => {
                    let (a, b) = (current.as_f64().unwrap_or(0.0), step.as_f64().unwrap_or(0.0));
                    Value::Float(a + b)
                }
                (Some(_), _) => return Err(FrontmatterModifyError::NotNumber(op.field.clone())),
            };
            fm.insert(op.field.clone(), next);
        }
        FrontmatterOpType::Append => {
            let Some(value) = &op.value else {
                return Err(FrontmatterModifyError::MissingValue(op.field.clone()));
            };
            let append_val = render_value(value, render_ctx);

            match fm.get_mut(&op.field) {
                Some(Value::Sequence(seq)) => seq.push(append_val),
                None => {
                    fm.insert(op.field.clone(), vec![append_val]);
                }
                Some(_) => return Err(FrontmatterModifyError::NotList(op.field.clone())),
            }
        }
    }
    Ok(())
}

/// Render {{var}} placeholders in string values, recursing into containers.
pub fn render_value(value: &Value, ctx: &HashMap<String, String>) -> Value {
    match value {
        Value::String(s) => Value::String(render_string(s, ctx)),
        Value::Mapping(map) => {
            Value::Mapping(map.iter().map(|(k, v)| (k, render_value(v, ctx))).collect())
        }
        Value::Sequence(seq) => {
            Value::Sequence(seq.iter().map(|v| render_value(v, ctx)).collect())
        }
        _ => value.clone(),
    }
}

/// Render {{var}} placeholders in a string; unknown names stay verbatim.
fn render_string(template: &str, ctx: &HashMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let key = &caps[1];
            ctx.get(key).cloned().unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
