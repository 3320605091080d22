/*!
 * Script marker parser.
 *
 * Splits a free-form script into ordered text and marker segments. Marker
 * candidates look like `[TAG]` or `[TAG 3s]`. Candidates whose tag is not a
 * recognized kind are kept as plain text in their original position, so the
 * parser is total over every input string.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::kind::MarkerKind;

/// Regex for bracket candidates: `[TAG]` or `[TAG 3s]`
///
/// The separator before the seconds is any Unicode whitespace or U+FEFF.
static MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([A-ZÁÉÍÓÚÑa-záéíóúñ]+)(?:[\s\x{FEFF}]+([0-9]+)s)?\]")
        .expect("Invalid script marker regex")
});

/// One unit of parsed script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptSegment {
    /// Narration text, sliced verbatim from the script
    Text { content: String },

    /// A recognized directive
    #[serde(rename_all = "camelCase")]
    Marker {
        /// The bracketed literal as the author wrote it
        content: String,
        /// Normalized kind
        #[serde(rename = "markerType")]
        kind: MarkerKind,
        /// Seconds to pause, only for pause markers with a numeric suffix
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pause_duration: Option<u64>,
    },
}

impl ScriptSegment {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
        }
    }

    pub fn marker(
        content: impl Into<String>,
        kind: MarkerKind,
        pause_duration: Option<u64>,
    ) -> Self {
        Self::Marker {
            content: content.into(),
            kind,
            pause_duration,
        }
    }

    // @returns: Original literal covered by this segment
    pub fn content(&self) -> &str {
        match self {
            Self::Text { content } | Self::Marker { content, .. } => content,
        }
    }

    pub fn is_marker(&self) -> bool {
        matches!(self, Self::Marker { .. })
    }

    pub fn kind(&self) -> Option<MarkerKind> {
        match self {
            Self::Marker { kind, .. } => Some(*kind),
            Self::Text { .. } => None,
        }
    }

    pub fn pause_duration(&self) -> Option<u64> {
        match self {
            Self::Marker { pause_duration, .. } => *pause_duration,
            Self::Text { .. } => None,
        }
    }
}

/// Parse a script into ordered segments
///
/// Whitespace-only gaps between, before and after markers are dropped.
/// Everything else is preserved verbatim and in order.
pub fn parse_script(script: &str) -> Vec<ScriptSegment> {
    let mut segments = Vec::new();
    let mut last_index = 0;

    for captures in MARKER_REGEX.captures_iter(script) {
        // Group 0 and 1 always participate in a match
        let (Some(whole), Some(tag)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        push_text(&mut segments, &script[last_index..whole.start()]);

        match MarkerKind::from_tag(tag.as_str()) {
            Some(kind) => {
                let pause_duration = if kind.accepts_duration() {
                    captures.get(2).map(|digits| parse_seconds(digits.as_str()))
                } else {
                    None
                };
                segments.push(ScriptSegment::marker(whole.as_str(), kind, pause_duration));
            }
            None => {
                debug!("Unrecognized marker kept as text: {}", whole.as_str());
                segments.push(ScriptSegment::text(whole.as_str()));
            }
        }

        last_index = whole.end();
    }

    push_text(&mut segments, &script[last_index..]);

    segments
}

fn push_text(segments: &mut Vec<ScriptSegment>, slice: &str) {
    if !slice.trim().is_empty() {
        segments.push(ScriptSegment::text(slice));
    }
}

// Digit runs are ASCII only; anything too large for u64 saturates
fn parse_seconds(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

/// Parser facade that logs a summary of each parse
pub struct MarkerParser;

impl MarkerParser {
    /// Parse a script, logging how many segments were produced
    pub fn parse(script: &str) -> Vec<ScriptSegment> {
        let segments = parse_script(script);
        let markers = segments.iter().filter(|s| s.is_marker()).count();

        debug!(
            "Parsed script: chars={}, segments={}, markers={}",
            script.chars().count(),
            segments.len(),
            markers
        );

        segments
    }
}
