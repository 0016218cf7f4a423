//! CLI command handlers for huekit.
//!
//! This module provides headless, scriptable access to the palette engine
//! for automation, testing, and shell pipelines.

pub mod common;
pub mod config;
pub mod convert;
pub mod generate;
pub mod harmony;
pub mod presets;
pub mod session;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use generate::GenerateArgs;
pub use harmony::HarmonyArgs;
pub use presets::PresetsArgs;
pub use session::SessionArgs;
