//! FILENAME: src/config.rs
// PURPOSE: Compiled-in shell configuration.
// The shell takes no CLI arguments and reads no environment variables;
// everything below is fixed at build time.

/// Label the single window is registered under with the windowing host.
pub const WINDOW_LABEL: &str = "main";

pub const WINDOW_TITLE: &str = "Claude";

/// The remote chat service the window is pointed at.
pub const CHAT_URL: &str = "https://claude.ai";

pub const WINDOW_WIDTH: f64 = 400.0;
pub const WINDOW_HEIGHT: f64 = 800.0;
pub const WINDOW_RESIZABLE: bool = false;
pub const WINDOW_ALWAYS_ON_TOP: bool = true;

/// Keep the native frame so the window can be moved and closed normally.
pub const WINDOW_DECORATIONS: bool = true;

/// Unified log file name, created next to the executable when possible.
pub const LOG_FILE_NAME: &str = "claude-dock.log";
