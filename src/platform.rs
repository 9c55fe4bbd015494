//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the submit shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms (Cmd+S is accepted on macOS as well)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Clear form shortcut display
/// - macOS: "Cmd+R"
/// - Linux/Windows: "Ctrl+R"
#[cfg(target_os = "macos")]
pub const CLEAR_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const CLEAR_SHORTCUT: &str = "Ctrl+R";
