//! Integration tests for the OCR provider boundary.
//!
//! Responses are built as JSON in the provider's shape, decoded with
//! `parse_page` and scanned end to end.

use chrono::NaiveDate;
use roster_oxide::config::{NameMatch, RosterConfig};
use roster_oxide::ocr::parse_page;
use roster_oxide::roster::RosterScanner;
use roster_oxide::Error;
use serde_json::{json, Value};
use std::io::Write;

fn fallback_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()
}

/// One overlay line made of single-space separated words, 12px per character.
fn overlay_line(text: &str, left: f32, top: f32) -> Value {
    let mut x = left;
    let words: Vec<Value> = text
        .split_whitespace()
        .map(|w| {
            let width = 12.0 * w.chars().count() as f32;
            let word = json!({
                "WordText": w, "Left": x, "Top": top, "Width": width, "Height": 22.0
            });
            x += width + 12.0;
            word
        })
        .collect();
    json!({ "LineText": text, "MinTop": top, "MaxHeight": 22.0, "Words": words })
}

fn response(lines: Vec<Value>) -> String {
    let text = lines
        .iter()
        .map(|l| l["LineText"].as_str().unwrap_or_default().to_string())
        .collect::<Vec<_>>()
        .join("\r\n");
    json!({
        "OCRExitCode": 1,
        "IsErroredOnProcessing": false,
        "ParsedResults": [{
            "FileParseExitCode": 1,
            "ParsedText": text,
            "TextOverlay": { "Lines": lines, "HasOverlay": true }
        }]
    })
    .to_string()
}

/// A roster photo about 1200px wide, with the provider listing lines out of order.
fn roster_response() -> String {
    response(vec![
        overlay_line("G.C. SOTO", 80.0, 320.0),
        overlay_line("COMANDANCIA DE MADRID PUESTO PRINCIPAL", 150.0, 20.0),
        overlay_line("SERVICIOS PARA EL 5 DE ENERO DEL 2026", 200.0, 70.0),
        overlay_line("MAÑANA", 90.0, 220.0),
        overlay_line("TARDE", 560.0, 220.0),
        overlay_line("NOCHE", 960.0, 220.0),
        overlay_line("DI ROSA", 90.0, 360.0),
        overlay_line("G.C. LUNA 14:00-22:00", 500.0, 320.0),
        overlay_line("G.C. MORA", 980.0, 320.0),
        overlay_line("SALIENTES", 520.0, 800.0),
        overlay_line("CONTROLES CARRETERA", 480.0, 850.0),
        overlay_line("CABO VERA", 520.0, 900.0),
    ])
}

#[test]
fn test_overlay_response_end_to_end() {
    let page = parse_page(&roster_response()).unwrap();
    assert_eq!(page.lines().len(), 12);
    assert!(page
        .lines()
        .windows(2)
        .all(|pair| pair[0].min_top() <= pair[1].min_top()));

    let scanner = RosterScanner::default();

    let soto = scanner.scan(&page, "Soto", fallback_date());
    assert!(soto.found);
    assert_eq!(soto.date, NaiveDate::from_ymd_opt(2026, 1, 5).unwrap());
    assert_eq!(soto.shift, "MAÑANA");
    assert_eq!(soto.colleagues, vec!["Dª ROSA".to_string()]);

    let luna = scanner.scan(&page, "luna", fallback_date());
    assert_eq!(luna.shift, "14:00-22:00");
    assert_eq!(luna.start_time, "14:00");
    assert_eq!(luna.end_time, "22:00");

    let vera = scanner.scan(&page, "VERA", fallback_date());
    assert_eq!(vera.shift, "OVERFLOW CONTROLES");
}

#[test]
fn test_honorific_repair_makes_name_findable() {
    let page = parse_page(&roster_response()).unwrap();
    let result = RosterScanner::default().scan(&page, "Dª ROSA", fallback_date());
    assert!(result.found);
    assert_eq!(result.shift, "MAÑANA");
}

#[test]
fn test_response_without_overlay_uses_text() {
    let json = json!({
        "IsErroredOnProcessing": false,
        "ParsedResults": [{ "ParsedText": "NOCHE\r\nG.C. MORA\r\nG.C. SOTO" }]
    })
    .to_string();
    let page = parse_page(&json).unwrap();
    assert!(page.lines().is_empty());

    let result = RosterScanner::default().scan(&page, "MORA", fallback_date());
    assert!(result.found);
    assert_eq!(result.date, fallback_date());
    assert_eq!(result.raw_context, "NOCHE\nG.C. MORA\nG.C. SOTO");
    assert_eq!(
        result.colleagues,
        vec![RosterConfig::default().placeholders.text_only_colleagues]
    );
}

#[test]
fn test_provider_failure_is_an_error() {
    let json = json!({
        "IsErroredOnProcessing": true,
        "ErrorMessage": ["File size exceeds the maximum permissible file size limit"]
    })
    .to_string();
    match parse_page(&json) {
        Err(Error::Provider(msg)) => assert!(msg.contains("file size")),
        other => panic!("expected provider error, got {:?}", other),
    }
}

#[test]
fn test_malformed_payload_is_an_error() {
    assert!(matches!(parse_page("<html>502</html>"), Err(Error::Payload(_))));
}

#[test]
fn test_config_file_drives_scan() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"name_match": "token", "shift_labels": {{"left": "M", "mid": "T", "right": "N"}}}}"#
    )
    .unwrap();
    let config = RosterConfig::from_file(file.path()).unwrap();
    assert_eq!(config.name_match, NameMatch::Token);

    let page = parse_page(&roster_response()).unwrap();
    let scanner = RosterScanner::new(config);

    assert_eq!(scanner.scan(&page, "MORA", fallback_date()).shift, "N");
    // Token matching no longer finds a name by its prefix
    assert!(!scanner.scan(&page, "MOR", fallback_date()).found);
}
