//! Remold Path
//!
//! Deep property access for JSON trees: get and set by dot-delimited
//! path or explicit segment list.
//!
//! The resolution primitive keeps presence and value apart: [`extract`]
//! returns `Ok(None)` when a path leads nowhere and `Ok(Some(Value::Null))`
//! when a null is explicitly stored at the terminal key, so callers can
//! tell "missing" from "present but empty".
//!
//! # Example
//!
//! ```rust,ignore
//! use remold_path::{extract, set, Path};
//! use serde_json::json;
//!
//! let mut doc = json!({"address": {"city": "Phoenix"}});
//! let city = extract(&doc, &Path::from("address.city"))?;
//! set(&mut doc, &Path::from("address.zip"), json!("85001"))?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod access;
pub mod error;
pub mod path;

pub use access::{extract, set};
pub use error::{PathError, Result};
pub use path::{Path, Segment};
