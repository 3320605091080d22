/*!
 * Summary statistics over a parsed script.
 */

use log::debug;
use serde::Serialize;

use super::kind::MarkerKind;
use super::parser::ScriptSegment;

/// Counts and timing derived from parsed segments
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScriptStats {
    /// Whitespace separated words across text segments
    pub word_count: usize,
    /// Number of recognized markers
    pub marker_count: usize,
    /// Occurrences per kind, in `MarkerKind::ALL` order, zero counts omitted
    pub markers_by_kind: Vec<(MarkerKind, usize)>,
    /// Sum of all pause durations in seconds
    pub total_pause_secs: u64,
}

impl ScriptStats {
    pub fn from_segments(segments: &[ScriptSegment]) -> Self {
        let mut stats = Self::default();
        let mut counts = [0usize; MarkerKind::ALL.len()];

        for segment in segments {
            match segment {
                ScriptSegment::Text { content } => {
                    stats.word_count += content.split_whitespace().count();
                }
                ScriptSegment::Marker { kind, pause_duration, .. } => {
                    stats.marker_count += 1;
                    // ALL is declared in discriminant order
                    counts[*kind as usize] += 1;
                    if let Some(secs) = pause_duration {
                        stats.total_pause_secs = stats.total_pause_secs.saturating_add(*secs);
                    }
                }
            }
        }

        stats.markers_by_kind = MarkerKind::ALL
            .into_iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .collect();

        debug!(
            "Script stats: words={}, markers={}, pause_secs={}",
            stats.word_count, stats.marker_count, stats.total_pause_secs
        );

        stats
    }

    /// Occurrences of a single kind
    pub fn count_of(&self, kind: MarkerKind) -> usize {
        self.markers_by_kind
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Estimated reading time at the given pace, pauses included
    ///
    /// Returns `None` when `words_per_minute` is zero.
    pub fn estimated_reading_secs(&self, words_per_minute: u32) -> Option<f64> {
        if words_per_minute == 0 {
            return None;
        }
        let reading = self.word_count as f64 / f64::from(words_per_minute) * 60.0;
        Some(reading + self.total_pause_secs as f64)
    }

    /// Stats together with the reading estimate at `words_per_minute`
    pub fn report(&self, words_per_minute: u32) -> StatsReport<'_> {
        StatsReport {
            stats: self,
            words_per_minute,
            estimated_reading_secs: self.estimated_reading_secs(words_per_minute),
        }
    }
}

/// Stats view for output, including the pace-dependent estimate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport<'a> {
    #[serde(flatten)]
    pub stats: &'a ScriptStats,
    pub words_per_minute: u32,
    pub estimated_reading_secs: Option<f64>,
}
