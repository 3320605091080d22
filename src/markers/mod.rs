/*!
 * Script marker handling.
 *
 * - `kind`: the closed set of directive kinds and their display tables
 * - `parser`: splitting a script into text and marker segments
 * - `catalog`: help directory of the recognized kinds
 * - `stats`: word, marker and pause totals for a parsed script
 */

pub mod catalog;
pub mod kind;
pub mod parser;
pub mod stats;

pub use catalog::{MarkerInfo, available_markers};
pub use kind::MarkerKind;
pub use parser::{MarkerParser, ScriptSegment, parse_script};
pub use stats::{ScriptStats, StatsReport};
