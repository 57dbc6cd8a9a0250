//! Transformer configuration

use serde::{Deserialize, Serialize};

/// Options recognized by [`transform`](crate::transform)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Config {
    /// Log a warning whenever an extraction finds nothing
    #[serde(default)]
    pub warn: bool,
}
