/*!
 * End-to-end tests: script file to segments, stats and rendering
 */

use crate::common;
use intuitus::markers::{MarkerKind, MarkerParser, ScriptSegment, ScriptStats};
use intuitus::render;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_sampleScript_fromFile_shouldParseAllMarkers() -> anyhow::Result<()> {
    init_logger();
    let dir = common::create_temp_dir()?;
    let path = common::create_sample_script(dir.path(), "guion.txt")?;

    let script = std::fs::read_to_string(&path)?;
    let segments = MarkerParser::parse(&script);

    let kinds: Vec<MarkerKind> = segments.iter().filter_map(|s| s.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            MarkerKind::Pausa,
            MarkerKind::Sonreir,
            MarkerKind::Enfasis,
            MarkerKind::Respirar,
            MarkerKind::Lento,
            MarkerKind::Rapido,
            MarkerKind::Pausa,
            MarkerKind::Pensativo,
        ]
    );
    assert!(segments.contains(&ScriptSegment::text("[BAILAR]")));
    assert_eq!(segments.first(), Some(&ScriptSegment::text("Hola, bienvenidos. ")));
    Ok(())
}

#[test]
fn test_sampleScript_stats_shouldTotalPauses() {
    init_logger();
    let stats = ScriptStats::from_segments(&MarkerParser::parse(common::SAMPLE_SCRIPT));

    assert_eq!(stats.marker_count, 8);
    assert_eq!(stats.total_pause_secs, 7);
    assert_eq!(stats.count_of(MarkerKind::Pausa), 2);
    assert!(stats.estimated_reading_secs(150).is_some_and(|secs| secs > 7.0));
}

#[test]
fn test_sampleScript_renderPlain_shouldKeepEverySubstantiveCharacter() {
    let segments = MarkerParser::parse(common::SAMPLE_SCRIPT);
    let rendered = render::render_plain(&segments);

    let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    assert_eq!(strip(&rendered), strip(common::SAMPLE_SCRIPT));
}

#[test]
fn test_sampleScript_json_shouldRoundTripThroughSerde() -> anyhow::Result<()> {
    let segments = MarkerParser::parse(common::SAMPLE_SCRIPT);
    let json = serde_json::to_string(&segments)?;
    let back: Vec<ScriptSegment> = serde_json::from_str(&json)?;

    assert_eq!(back, segments);
    assert!(json.contains(r#""markerType":"SONREÍR""#));
    Ok(())
}
