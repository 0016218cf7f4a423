//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the palette size bounds and the starting palette.

/// Smallest number of entries a palette may hold.
pub const MIN_PALETTE_SIZE: usize = 2;

/// Largest number of entries a palette may hold.
pub const MAX_PALETTE_SIZE: usize = 10;

/// Number of colors every harmony strategy produces.
pub const HARMONY_SIZE: usize = 5;

/// Base color used before the first regeneration.
pub const DEFAULT_BASE_COLOR: &str = "#3b82f6";

/// Colors of the palette a fresh session starts with.
pub const DEFAULT_PALETTE_COLORS: [&str; 5] = ["#3b82f6", "#8b5cf6", "#ef4444", "#10b981", "#f59e0b"];

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "HUEKIT_CONFIG_DIR";
