//! Mapping instruction model
//!
//! An instruction is one declarative rule: extract a value from the
//! source, optionally rework it, and assign it into the result. A
//! mapping is an ordered list of instructions applied against a shared,
//! growing result object.
//!
//! The data subset of the model (paths, targets, defaults, nesting)
//! derives serde, so mapping documents can be written in YAML or JSON.
//! Callback fields are attached programmatically and never serialized.
//!
//! # Example
//!
//! ```yaml
//! - from: firstName
//!   to: name
//! - from: address.streetName
//!   to: street
//! - from: [address, province, name]
//!   to: province
//! - from: address.country.name
//!   to: country
//!   default: United States
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use remold_path::Path;

use crate::error::CallbackError;

/// Post-processing callback.
///
/// Receives the produced value, the result built so far by earlier
/// instructions, and the untouched source of the enclosing
/// [`transform`](crate::transform) call, in that order.
pub type TransformFn =
    dyn Fn(Value, &Value, &Value) -> std::result::Result<Value, CallbackError> + Send + Sync;

/// Combining callback for multi-path extraction.
///
/// Receives the extracted values positionally, in `paths` order.
pub type CombineFn =
    dyn Fn(Vec<Value>) -> std::result::Result<Value, CallbackError> + Send + Sync;

/// Where an instruction reads from
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Source {
    /// Extract several paths at once
    Multi(MultiSource),

    /// Extract a single path; the root path selects the whole source
    Single(Path),
}

/// A multi-path extraction: every path must resolve, and the extracted
/// values are either combined by a callback or collected into an array
/// in `paths` order.
#[derive(Clone, Serialize, Deserialize)]
pub struct MultiSource {
    /// Paths to extract, in order; each may itself be the root path
    pub paths: Vec<Path>,

    /// Optional combining callback
    #[serde(skip)]
    pub combine: Option<Arc<CombineFn>>,
}

/// Where an instruction writes to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    /// Merge the produced object's entries into the result
    /// (written as `null` in documents)
    Merge,

    /// Write the produced value at a path inside the result
    Path(Path),
}

/// One mapping rule
#[derive(Clone, Serialize, Deserialize)]
pub struct Instruction {
    /// Where to read from
    pub from: Source,

    /// Where to write to
    pub to: Target,

    /// Nested instructions, applied to the extracted value (as its own
    /// root) before `transform`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<Instruction>,

    /// Post-processing callback, applied after nested instructions
    #[serde(skip)]
    pub transform: Option<Arc<TransformFn>>,

    /// Substitute when the extraction finds nothing. A stored null is
    /// still "found" and is never defaulted.
    #[serde(
        default,
        deserialize_with = "explicit_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
}

/// Keeps `default: null` (substitute null) apart from an absent
/// `default` key (no substitution).
fn explicit_default<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Instruction {
    /// Create an instruction mapping `from` to `to`
    pub fn new(from: impl Into<Source>, to: impl Into<Target>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            instructions: Vec::new(),
            transform: None,
            default: None,
        }
    }

    /// Attach nested instructions, applied to the extracted value before
    /// the `transform` callback
    pub fn nested(mut self, instructions: impl IntoIterator<Item = Instruction>) -> Self {
        self.instructions = instructions.into_iter().collect();
        self
    }

    /// Attach a post-processing callback
    pub fn transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(Value, &Value, &Value) -> std::result::Result<Value, CallbackError>
            + Send
            + Sync
            + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    /// Substitute `default` when the extraction finds nothing
    pub fn default_value(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

impl MultiSource {
    /// Extract the given paths, collecting the values in order
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Path>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            combine: None,
        }
    }

    /// Combine the extracted values with a callback
    pub fn combine<F>(mut self, combine: F) -> Self
    where
        F: Fn(Vec<Value>) -> std::result::Result<Value, CallbackError> + Send + Sync + 'static,
    {
        self.combine = Some(Arc::new(combine));
        self
    }
}

impl From<Path> for Source {
    fn from(path: Path) -> Self {
        Source::Single(path)
    }
}

impl From<&str> for Source {
    fn from(dotted: &str) -> Self {
        Source::Single(Path::from(dotted))
    }
}

impl From<String> for Source {
    fn from(dotted: String) -> Self {
        Source::Single(Path::from(dotted))
    }
}

impl From<MultiSource> for Source {
    fn from(multi: MultiSource) -> Self {
        Source::Multi(multi)
    }
}

impl From<Path> for Target {
    fn from(path: Path) -> Self {
        Target::Path(path)
    }
}

impl From<&str> for Target {
    fn from(dotted: &str) -> Self {
        Target::Path(Path::from(dotted))
    }
}

impl From<String> for Target {
    fn from(dotted: String) -> Self {
        Target::Path(Path::from(dotted))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Single(path) => write!(f, "{path}"),
            Source::Multi(multi) => {
                for (position, path) in multi.paths.iter().enumerate() {
                    if position > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{path}")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Merge => write!(f, "(merge)"),
            Target::Path(path) => write!(f, "{path}"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Single(path) => f.debug_tuple("Single").field(path).finish(),
            Source::Multi(multi) => f.debug_tuple("Multi").field(multi).finish(),
        }
    }
}

impl fmt::Debug for MultiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiSource")
            .field("paths", &self.paths)
            .field("combine", &self.combine.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("instructions", &self.instructions)
            .field("transform", &self.transform.as_ref().map(|_| "<fn>"))
            .field("default", &self.default)
            .finish()
    }
}
