//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Values that vary per deployment are read from the build environment with
//! `option_env!`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "filedesk";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Directory Backend
// =============================================================================

/// Base URL of the directory REST API.
///
/// Set `FILEDESK_API_URL` at build time to talk to a server; without it the
/// bundled fixture directory is used.
pub const API_BASE_URL: Option<&str> = option_env!("FILEDESK_API_URL");

/// Simulated latency of the fixture directory in milliseconds.
pub const FIXTURE_LATENCY_MS: u32 = 300;

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Sharing
// =============================================================================

/// Prefix of derived share links.
pub const SHARE_BASE_URL: &str = "https://example.com/share";

/// How long the "copied" confirmation stays visible, in milliseconds.
pub const COPY_FEEDBACK_MS: u32 = 2000;

/// How long a download's object URL outlives the anchor click, in milliseconds.
pub const OBJECT_URL_REVOKE_MS: u32 = 30_000;

// =============================================================================
// Listing
// =============================================================================

/// Rows per page on first visit.
pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Choices offered by the rows-per-page selector.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [7, 10, 25];

// =============================================================================
// Logging
// =============================================================================

/// Most verbose level forwarded to the browser console.
#[cfg(debug_assertions)]
pub const LOG_LEVEL: tracing::Level = tracing::Level::DEBUG;

/// Most verbose level forwarded to the browser console.
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: tracing::Level = tracing::Level::INFO;

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key for page size and sort preferences.
    pub const VIEW_PREFS_KEY: &str = "filedesk_view_prefs";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
