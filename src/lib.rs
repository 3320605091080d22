/*!
 * # Intuitus - teleprompter script markers
 * 
 * A Rust library for the script side of a teleprompter recording tool.
 * 
 * ## Features
 * 
 * - Parse scripts into narration text and bracketed directives such as
 *   `[PAUSA 3s]`, `[SONREÍR]` or `[ÉNFASIS]`
 * - Case-insensitive markers, with unaccented spellings accepted
 * - Unrecognized brackets kept as plain text, never an error
 * - Help directory of every recognized marker
 * - Word, marker and pause totals with reading time estimates
 * - Teleprompter speed and font size settings
 * 
 * ## Architecture
 * 
 * The library is organized in these main modules:
 * - `markers`: Script marker handling:
 *   - `markers::kind`: The closed set of marker kinds
 *   - `markers::parser`: Script to segment parsing
 *   - `markers::catalog`: Marker help directory
 *   - `markers::stats`: Script statistics
 * - `teleprompter`: Playback settings
 * - `render`: Terminal rendering
 * - `app_config`: Configuration management
 * - `errors`: Custom error types for the application
 * 
 * ## License
 * 
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod markers;
pub mod render;
pub mod teleprompter;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{ConfigError, MarkerError};
pub use markers::{
    MarkerInfo, MarkerKind, ScriptSegment, ScriptStats, StatsReport, available_markers,
    parse_script,
};
pub use teleprompter::TeleprompterSettings;
