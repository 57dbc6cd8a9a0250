//! Remold Core Library
//!
//! This crate provides the core functionality for Remold:
//! - Mapping instruction model (sources, targets, defaults, callbacks)
//! - The interpreter that applies instructions to JSON values
//! - Reusable transformers bound to a fixed instruction set
//! - Mapping document parsing (YAML/JSON)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   Source    │────▶│ Interpreter  │────▶│   Result    │
//! │   (JSON)    │     │ (instructions)│     │   (JSON)    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! The source is never mutated; every call builds a fresh result. An
//! extraction distinguishes "key missing" from "key present with an
//! explicit null", and defaults only apply to the former.
//!
//! # Example
//!
//! ```rust,ignore
//! use remold_core::{Instruction, Transformer};
//! use serde_json::json;
//!
//! let mapping = Transformer::new([
//!     Instruction::new("firstName", "name"),
//!     Instruction::new("address.streetName", "street"),
//! ]);
//! let result = mapping.apply(&json!({"firstName": "Jane"}))?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod instruction;
pub mod interpreter;
pub mod transformer;

pub use config::Config;
pub use error::{CallbackError, Error, Result};
pub use instruction::{CombineFn, Instruction, MultiSource, Source, Target, TransformFn};
pub use interpreter::transform;
pub use transformer::Transformer;

pub use remold_path::{Path, PathError, Segment};
