/*!
 * Property tests for the script marker parser
 */

use intuitus::markers::{MarkerKind, ScriptSegment, parse_script};

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn reconstruct(segments: &[ScriptSegment]) -> String {
    segments.iter().map(|s| s.content()).collect()
}

/// Scripts without brackets come back as one text segment
#[test]
fn test_parse_withoutBrackets_shouldReturnInputVerbatim() {
    for script in ["Hola", "  línea con acentos: ñandú, acción  ", "uno\ndos\n\ttres"] {
        assert_eq!(parse_script(script), vec![ScriptSegment::text(script)]);
    }
    for blank in ["", " ", "\n\n", "\t \r\n"] {
        assert!(parse_script(blank).is_empty());
    }
}

/// Every kind resolves regardless of case, including mixed case
#[test]
fn test_parse_withMixedCaseTags_shouldResolveCanonicalKind() {
    for kind in MarkerKind::ALL {
        let mixed: String = kind
            .canonical()
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if i % 2 == 0 {
                    c.to_lowercase().collect::<String>()
                } else {
                    c.to_string()
                }
            })
            .collect();
        let literal = format!("[{}]", mixed);
        let segments = parse_script(&literal);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind(), Some(kind), "literal {}", literal);
        assert_eq!(segments[0].content(), literal);
    }
}

/// Unaccented aliases normalize to the accented kinds
#[test]
fn test_parse_withAliases_shouldNormalize() {
    let cases = [
        ("[SONREIR]", MarkerKind::Sonreir),
        ("[sonreír]", MarkerKind::Sonreir),
        ("[ENFASIS]", MarkerKind::Enfasis),
        ("[Énfasis]", MarkerKind::Enfasis),
        ("[rapido]", MarkerKind::Rapido),
        ("[RÁPIDO]", MarkerKind::Rapido),
    ];

    for (literal, kind) in cases {
        let segments = parse_script(literal);
        assert_eq!(segments, vec![ScriptSegment::marker(literal, kind, None)]);
    }
}

/// Pause durations come only from pause markers
#[test]
fn test_parse_pauseDurations_shouldOnlyAttachToPause() {
    let segments = parse_script("[PAUSA 3s][Pausa 12s][pausa][TRISTE 4s]");

    let durations: Vec<Option<u64>> = segments.iter().map(|s| s.pause_duration()).collect();
    assert_eq!(durations, vec![Some(3), Some(12), None, None]);
    assert_eq!(segments[3].kind(), Some(MarkerKind::Triste));
}

/// Reparsing the reassembled output yields the same segments
#[test]
fn test_parse_reassembled_shouldBeStable() {
    let scripts = [
        "Hola [PAUSA 2s] mundo",
        "  [SONREIR]   texto  [x] [PAUSA 1s]  ",
        "[[PAUSA]] ] [ [LENTO 3s]",
        "sin marcadores",
    ];

    for script in scripts {
        let segments = parse_script(script);
        let rebuilt = reconstruct(&segments);

        assert_eq!(strip_whitespace(&rebuilt), strip_whitespace(script), "script {}", script);
        assert_eq!(parse_script(&rebuilt), segments, "script {}", script);
    }
}

/// Segments never hold whitespace-only content
#[test]
fn test_parse_shouldNeverEmitBlankText() {
    let segments = parse_script(" \n[PAUSA 1s] \t [SERIO]\n\n[nada]  \n");

    assert!(segments.iter().all(|s| !s.content().trim().is_empty()));
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[2], ScriptSegment::text("[nada]"));
}

/// Pathological inputs never panic
#[test]
fn test_parse_withPathologicalInput_shouldNotPanic() {
    let long_brackets = "[".repeat(10_000) + &"]".repeat(10_000);
    let many_markers = "[PAUSA 1s]".repeat(1_000);
    let inputs = [
        long_brackets.as_str(),
        many_markers.as_str(),
        "[\u{0}]",
        "[🎬]",
        "[PAUSA 1s",
        "]]]][[[[",
        "[ÁÉÍÓÚÑ]",
    ];

    for input in inputs {
        let segments = parse_script(input);
        assert_eq!(strip_whitespace(&reconstruct(&segments)), strip_whitespace(input));
    }

    assert_eq!(parse_script(&many_markers).len(), 1_000);
}
