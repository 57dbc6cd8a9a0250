//! Mapping interpreter
//!
//! Applies mapping instructions to a source value, building a fresh
//! result without touching the source. Instructions run in order against
//! a shared result object; later instructions may overwrite or merge
//! over keys written by earlier ones.

use serde_json::{Map, Value};

use remold_path as path;
use remold_path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::instruction::{Instruction, Source, Target};

/// Apply a sequence of instructions to a source value.
///
/// An object source yields one result object. An array source fans out:
/// every element is mapped independently, in order, and the results are
/// collected into an array of the same length. Anything else is rejected
/// with [`Error::InvalidSource`].
pub fn transform(source: &Value, instructions: &[Instruction], config: &Config) -> Result<Value> {
    match source {
        Value::Array(items) => items
            .iter()
            .map(|item| transform(item, instructions, config))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        Value::Object(_) => {
            let mut result = Value::Object(Map::new());
            for instruction in instructions {
                apply_one(source, instruction, &mut result, config)?;
            }
            Ok(result)
        }
        other => Err(Error::InvalidSource {
            found: value_kind(other),
        }),
    }
}

fn apply_one(
    source: &Value,
    instruction: &Instruction,
    result: &mut Value,
    config: &Config,
) -> Result<()> {
    let produced = match extract_from(source, instruction)? {
        Some(mut value) => {
            // Nested instructions see the extracted value as their own
            // root; they always run before the transform callback.
            if !instruction.instructions.is_empty() {
                value = transform(&value, &instruction.instructions, config)?;
            }
            if let Some(callback) = instruction.transform.as_deref() {
                value = callback(value, &*result, source).map_err(Error::Callback)?;
            }
            value
        }
        None => {
            if config.warn {
                tracing::warn!("nothing found at '{}'", instruction.from);
            }
            // The extraction found nothing: skip nested instructions and
            // the callback, substitute the default or an explicit null.
            match &instruction.default {
                Some(default) => default.clone(),
                None => Value::Null,
            }
        }
    };

    assign(result, instruction, produced)
}

fn extract_from(source: &Value, instruction: &Instruction) -> Result<Option<Value>> {
    match &instruction.from {
        Source::Single(path) => extract_path(source, path, instruction),
        Source::Multi(multi) => {
            let mut values = Vec::with_capacity(multi.paths.len());
            for sub_path in &multi.paths {
                match extract_path(source, sub_path, instruction)? {
                    Some(value) => values.push(value),
                    // One missing sub-path makes the whole extraction
                    // count as missing.
                    None => return Ok(None),
                }
            }
            match multi.combine.as_deref() {
                Some(combine) => combine(values).map(Some).map_err(Error::Callback),
                None => Ok(Some(Value::Array(values))),
            }
        }
    }
}

fn extract_path(source: &Value, path: &Path, instruction: &Instruction) -> Result<Option<Value>> {
    if path.is_root() {
        return Ok(Some(source.clone()));
    }
    path::extract(source, path).map_err(|source| Error::FromPath {
        instruction: Box::new(instruction.clone()),
        source,
    })
}

fn assign(result: &mut Value, instruction: &Instruction, value: Value) -> Result<()> {
    match &instruction.to {
        Target::Merge => merge_into(result, instruction, value),
        Target::Path(target) => {
            path::set(result, target, value).map_err(|source| Error::ToPath {
                instruction: Box::new(instruction.clone()),
                source,
            })
        }
    }
}

fn merge_into(result: &mut Value, instruction: &Instruction, value: Value) -> Result<()> {
    match value {
        Value::Object(entries) => {
            if let Value::Object(map) = result {
                map.extend(entries);
            }
            Ok(())
        }
        other => Err(Error::MergeNonObject {
            instruction: Box::new(instruction.clone()),
            found: value_kind(&other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
