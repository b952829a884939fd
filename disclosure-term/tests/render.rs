use disclosure_term::TermConfig;
use disclosure_term::hover::Rect;
use disclosure_term::render::{layout, paint};

fn config() -> TermConfig {
    TermConfig {
        header: "Details".into(),
        hint: "Hover to view".into(),
        body: vec!["first".into(), "second".into()],
        ..Default::default()
    }
}

#[test]
fn test_closed_layout_hides_body() {
    let frame = layout(&config(), false);

    assert_eq!(frame.header, "▶ Details");
    assert_eq!(frame.hint, "  Hover to view");
    assert!(frame.body.is_empty());
}

#[test]
fn test_open_layout_shows_body_below_header() {
    let frame = layout(&config(), true);

    assert_eq!(frame.header, "▼ Details");
    assert_eq!(
        frame.body,
        vec![(2, "first".to_string()), (3, "second".to_string())]
    );
}

#[test]
fn test_region_spans_header_and_hint() {
    let frame = layout(&config(), false);

    // "▶ Details" (9) + "  Hover to view" (15)
    assert_eq!(frame.region, Rect::new(2, 1, 24, 1));
}

#[test]
fn test_region_is_stable_across_visibility() {
    assert_eq!(layout(&config(), false).region, layout(&config(), true).region);
}

#[test]
fn test_paint_writes_header_and_body() {
    let mut out = Vec::new();
    let region = paint(&mut out, &config(), true).unwrap();
    let text = String::from_utf8_lossy(&out);

    assert_eq!(region, layout(&config(), true).region);
    assert!(text.contains("▼ Details"));
    assert!(text.contains("Hover to view"));
    assert!(text.contains("second"));
}

#[test]
fn test_paint_closed_omits_body() {
    let mut out = Vec::new();
    paint(&mut out, &config(), false).unwrap();
    let text = String::from_utf8_lossy(&out);

    assert!(text.contains("▶ Details"));
    assert!(!text.contains("first"));
}

#[test]
fn test_body_stops_at_last_terminal_row() {
    let config = TermConfig {
        body: vec!["line".to_string(); 70_000],
        ..config()
    };
    let frame = layout(&config, true);

    // Header sits on row 1, so rows 2..=u16::MAX hold the body
    assert_eq!(frame.body.len(), u16::MAX as usize - 1);
    assert_eq!(frame.body.last().map(|(row, _)| *row), Some(u16::MAX));
}
