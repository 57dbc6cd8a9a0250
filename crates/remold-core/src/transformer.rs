//! Reusable transformer bound to a fixed instruction set

use serde_json::Value;

use crate::config::Config;
use crate::error::Result;
use crate::instruction::Instruction;
use crate::interpreter::transform;

/// A mapping bound to its instruction set, reusable across sources.
///
/// Holds no state beyond the instructions themselves; applying it is
/// equivalent to calling [`transform`] with the same arguments, so a
/// single instance can be shared across threads and reused freely.
#[derive(Debug, Clone)]
pub struct Transformer {
    instructions: Vec<Instruction>,
}

impl Transformer {
    /// Bind an instruction set
    pub fn new(instructions: impl IntoIterator<Item = Instruction>) -> Self {
        Self {
            instructions: instructions.into_iter().collect(),
        }
    }

    /// Parse a mapping document from YAML.
    ///
    /// Documents carry the data subset of the instruction model: paths,
    /// targets, defaults, and nested instructions. Callbacks are attached
    /// afterwards through [`Transformer::instructions_mut`].
    pub fn from_yaml(document: &str) -> Result<Self> {
        let instructions: Vec<Instruction> = serde_yaml::from_str(document)?;
        Ok(Self { instructions })
    }

    /// Parse a mapping document from JSON.
    pub fn from_json(document: &str) -> Result<Self> {
        let instructions: Vec<Instruction> = serde_json::from_str(document)?;
        Ok(Self { instructions })
    }

    /// The bound instructions
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Mutable access to the bound instructions, for attaching callbacks
    /// to a parsed document
    pub fn instructions_mut(&mut self) -> &mut Vec<Instruction> {
        &mut self.instructions
    }

    /// Apply the mapping to a source with default options
    pub fn apply(&self, source: &Value) -> Result<Value> {
        self.apply_with(source, &Config::default())
    }

    /// Apply the mapping to a source with explicit options
    pub fn apply_with(&self, source: &Value, config: &Config) -> Result<Value> {
        transform(source, &self.instructions, config)
    }
}
