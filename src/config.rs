//! Application configuration.
//!
//! Centralizes the constants used throughout the crate. Text assets are
//! loaded at compile time with `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII banner shown at session start and by the `welcome` command.
pub const ASCII_BANNER: &str = include_str!("../assets/text/banner.txt");

/// Built-in demo filesystem manifest (JSON).
pub const DEMO_MANIFEST: &str = include_str!("../assets/demo-manifest.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the prompt.
pub const APP_NAME: &str = "demosh";

/// Fixed identity string for `whoami` and the prompt.
pub const USER_NAME: &str = "guest";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of history lines retained by a session.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

/// Maximum number of recall buffer entries retained by a session.
pub const MAX_COMMAND_RECALL: usize = 100;

/// Default user variables set at session start.
pub const DEFAULT_USER_VARS: &[(&str, &str)] =
    &[("THEME", "dark"), ("LANG", "en"), ("EDITOR", "vim")];

/// Pipe filter defaults.
pub mod pipe_filters {
    /// Default number of lines for the `head` filter.
    pub const DEFAULT_HEAD_LINES: usize = 10;
    /// Default number of lines for the `tail` filter.
    pub const DEFAULT_TAIL_LINES: usize = 10;
}
