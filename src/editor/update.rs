//! Update command application
//!
//! Walks the document tree along a parsed path expression and sets the
//! replacement value at the leaf. With `overwrite` set, existing values are
//! replaced and missing intermediate mappings are created; without it, only
//! paths that do not yet resolve are filled in.

use serde_yaml::{Mapping, Value};

use crate::editor::error::EditError;
use crate::editor::log::{EditorLog, StreamLog};
use crate::editor::{path, value};

/// A single update directive: target path, replacement value, overwrite flag
#[derive(Debug, Clone)]
pub struct UpdateCommand {
    pub path: String,
    pub value: Value,
    pub overwrite: bool,
}

impl UpdateCommand {
    /// Build an overwriting command from a path and a raw replacement string
    pub fn new(path: impl Into<String>, raw_value: &str) -> Self {
        Self {
            path: path.into(),
            value: value::parse(raw_value),
            overwrite: true,
        }
    }
}

/// Applies update commands to a document tree, reporting failures through the
/// diagnostics sink injected at construction
pub struct Editor {
    log: Box<dyn EditorLog>,
}

impl Editor {
    pub fn new(log: Box<dyn EditorLog>) -> Self {
        Self { log }
    }

    /// Editor with diagnostics wired to the process error stream
    pub fn stderr() -> Self {
        Self::new(Box::new(StreamLog::stderr()))
    }

    /// Apply a single update command to the document in place
    pub fn update(&self, root: &mut Value, command: &UpdateCommand) -> Result<(), EditError> {
        let result = apply(root, command);
        if let Err(e) = &result {
            self.log
                .error(&format!("update of '{}' failed: {}", command.path, e));
        }
        result
    }
}

fn apply(root: &mut Value, command: &UpdateCommand) -> Result<(), EditError> {
    let segments = path::parse(&command.path)?;
    let Some((leaf, parents)) = segments.split_last() else {
        return Err(EditError::EmptyPath);
    };

    let mut cursor = root;
    for segment in parents {
        cursor = descend(cursor, segment, command.overwrite)?;
    }

    set_leaf(cursor, leaf, command)
}

fn descend<'a>(
    node: &'a mut Value,
    segment: &str,
    overwrite: bool,
) -> Result<&'a mut Value, EditError> {
    if let Value::Sequence(seq) = node {
        let index = parse_index(segment)?;
        let len = seq.len();
        return seq
            .get_mut(index)
            .ok_or(EditError::IndexOutOfBounds { index, len });
    }

    if node.is_null() || (overwrite && is_scalar(node)) {
        *node = Value::Mapping(Mapping::new());
    }

    match node {
        Value::Mapping(map) => Ok(map
            .entry(Value::String(segment.to_string()))
            .or_insert(Value::Null)),
        other => Err(EditError::NotTraversable {
            segment: segment.to_string(),
            kind: kind_name(other),
        }),
    }
}

fn set_leaf(node: &mut Value, segment: &str, command: &UpdateCommand) -> Result<(), EditError> {
    if let Value::Sequence(seq) = node {
        let index = parse_index(segment)?;
        let len = seq.len();
        let slot = seq
            .get_mut(index)
            .ok_or(EditError::IndexOutOfBounds { index, len })?;
        if command.overwrite || slot.is_null() {
            *slot = command.value.clone();
        }
        return Ok(());
    }

    if node.is_null() || (command.overwrite && is_scalar(node)) {
        *node = Value::Mapping(Mapping::new());
    }

    match node {
        Value::Mapping(map) => {
            let key = Value::String(segment.to_string());
            if command.overwrite || !map.contains_key(&key) {
                map.insert(key, command.value.clone());
            }
            Ok(())
        }
        other => Err(EditError::NotTraversable {
            segment: segment.to_string(),
            kind: kind_name(other),
        }),
    }
}

fn parse_index(segment: &str) -> Result<usize, EditError> {
    segment.parse().map_err(|_| EditError::NotAnIndex {
        segment: segment.to_string(),
    })
}

fn is_scalar(node: &Value) -> bool {
    matches!(node, Value::Bool(_) | Value::Number(_) | Value::String(_))
}

fn kind_name(node: &Value) -> &'static str {
    match node {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
