//! Domain model (config, store keys, prompt rule, errors).

pub mod config;
pub mod decision;
pub mod errors;
pub mod keys;

pub use self::config::{DEFAULT_STORE_BASE_URL, PromptConfig};
pub use self::decision::{PromptDecision, ThresholdRule};
pub use self::errors::{BuildError, ConfigError, ReviewPromptError, StoreError};
pub use self::keys::StoreKey;
