/*!
 * Terminal rendering of parsed scripts and the marker help panel.
 */

use crate::markers::{MarkerInfo, ScriptSegment, StatsReport};

const GREEN_BOLD: &str = "\x1B[1;32m";
const RESET: &str = "\x1B[0m";

/// Reassemble segments, markers reproduced verbatim
pub fn render_plain(segments: &[ScriptSegment]) -> String {
    segments.iter().map(|s| s.content()).collect()
}

/// Render segments with markers prefixed by their icon
///
/// When `color` is set, markers are wrapped in bold green ANSI codes.
pub fn render_highlighted(segments: &[ScriptSegment], color: bool) -> String {
    let mut out = String::new();

    for segment in segments {
        match segment {
            ScriptSegment::Text { content } => out.push_str(content),
            ScriptSegment::Marker { content, kind, .. } => {
                if color {
                    out.push_str(GREEN_BOLD);
                }
                out.push_str(kind.icon());
                out.push(' ');
                out.push_str(content);
                if color {
                    out.push_str(RESET);
                }
            }
        }
    }

    out
}

/// Help table: one line per marker
pub fn render_markers_help(markers: &[MarkerInfo]) -> String {
    let width = markers
        .iter()
        .map(|m| m.example.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for info in markers {
        let pad = width - info.example.chars().count();
        out.push_str(&format!(
            "{} {}{}  {}\n",
            info.icon,
            info.example,
            " ".repeat(pad),
            info.description
        ));
    }
    out
}

/// Stats summary, reading estimate included
pub fn render_stats(report: &StatsReport<'_>) -> String {
    let stats = report.stats;
    let mut out = String::new();

    out.push_str(&format!("Words:   {}\n", stats.word_count));
    out.push_str(&format!("Markers: {}\n", stats.marker_count));
    for (kind, count) in &stats.markers_by_kind {
        out.push_str(&format!("  {} {:<12} {}\n", kind.icon(), kind.canonical(), count));
    }
    out.push_str(&format!("Pauses:  {}s\n", stats.total_pause_secs));

    match report.estimated_reading_secs {
        Some(secs) => out.push_str(&format!(
            "Reading: {:.0}s at {} wpm\n",
            secs, report.words_per_minute
        )),
        None => out.push_str("Reading: unavailable at 0 wpm\n"),
    }
    out
}
