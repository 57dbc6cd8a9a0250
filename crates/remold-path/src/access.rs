//! Get and set primitives over JSON trees

use serde_json::{Map, Value};

use crate::error::{PathError, Result};
use crate::path::{Path, Segment};

/// Resolve `path` inside `container`.
///
/// Returns `Ok(None)` when any step of the walk lands on a missing key
/// or a container that cannot be indexed. Returns `Ok(Some(value))` when
/// the full path resolves, even when the stored value is `null`: an
/// explicit null at the terminal key counts as present.
pub fn extract(container: &Value, path: &Path) -> Result<Option<Value>> {
    let segments = path.segments()?;
    let mut current = container;
    for segment in &segments {
        current = match step(current, segment) {
            Some(next) => next,
            None => return Ok(None),
        };
    }
    Ok(Some(current.clone()))
}

fn step<'a>(container: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match (container, segment) {
        (Value::Object(map), Segment::Key(key)) => map.get(key),
        (Value::Object(map), Segment::Index(index)) => map.get(&index.to_string()),
        (Value::Array(items), Segment::Index(index)) => items.get(*index),
        (Value::Array(items), Segment::Key(key)) => {
            key.parse::<usize>().ok().and_then(|index| items.get(index))
        }
        _ => None,
    }
}

/// Write `value` at `path` inside `container`, creating intermediate
/// plain objects as needed.
///
/// Intermediate scalars and nulls are replaced by fresh objects so the
/// walk can continue. An index into an existing array writes in place,
/// padding with nulls when the index is past the end.
pub fn set(container: &mut Value, path: &Path, value: Value) -> Result<()> {
    let segments = path.segments()?;
    let Some((last, walk)) = segments.split_last() else {
        return Err(PathError::Empty);
    };
    let mut current = container;
    for segment in walk {
        current = descend(current, segment);
    }
    place(current, last, value);
    Ok(())
}

fn descend<'a>(current: &'a mut Value, segment: &Segment) -> &'a mut Value {
    match (segment, current) {
        (Segment::Index(index), Value::Array(items)) => {
            if *index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            &mut items[*index]
        }
        (segment, current) => {
            if !current.is_object() {
                *current = Value::Object(Map::new());
            }
            match current {
                Value::Object(map) => map.entry(segment.to_string()).or_insert(Value::Null),
                _ => unreachable!("intermediate was just replaced with an object"),
            }
        }
    }
}

fn place(current: &mut Value, segment: &Segment, value: Value) {
    match (segment, current) {
        (Segment::Index(index), Value::Array(items)) => {
            if *index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            items[*index] = value;
        }
        (segment, current) => {
            if !current.is_object() {
                *current = Value::Object(Map::new());
            }
            if let Value::Object(map) = current {
                map.insert(segment.to_string(), value);
            }
        }
    }
}
