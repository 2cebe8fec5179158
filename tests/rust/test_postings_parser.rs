use super::*;

// ── Format selection ─────────────────────────────────────────────────────────

#[test]
fn test_detect_format() {
    assert_eq!(InputFormat::detect("  [ ]"), InputFormat::Json);
    assert_eq!(InputFormat::detect("\n{\"postings\": []}"), InputFormat::Json);
    assert_eq!(InputFormat::detect("world -> a USD/2 1"), InputFormat::Text);
    assert_eq!(InputFormat::detect(""), InputFormat::Text);
}

#[test]
fn test_input_format_from_str() {
    assert_eq!("JSON".parse::<InputFormat>().unwrap(), InputFormat::Json);
    assert_eq!("text".parse::<InputFormat>().unwrap(), InputFormat::Text);
    assert!(matches!(
        "xml".parse::<InputFormat>(),
        Err(FlowError::UnknownFormat(f)) if f == "xml"
    ));
}

// ── JSON ─────────────────────────────────────────────────────────────────────

#[test]
fn test_parse_json_list() {
    let src = r#"[{"amount": "USD/2 100", "source": "world", "destination": "alice"}]"#;
    let p = parse_json(src).unwrap();
    assert_eq!(p, vec![Posting::new("world", "alice", "USD/2 100")]);
}

#[test]
fn test_parse_json_transaction_object() {
    let src = r#"{"id": 7, "postings": [
        {"amount": "USD/2 100", "source": "@world", "destination": "@bank"},
        {"amount": "USD/2 100", "source": "bank", "destination": "users:1"}
    ]}"#;
    let p = parse_json(src).unwrap();
    assert_eq!(p.len(), 2);
    assert_eq!(p[0].source, "world");
    assert_eq!(p[0].destination, "bank");
    assert_eq!(p[1].destination, "users:1");
}

#[test]
fn test_parse_json_error() {
    assert!(matches!(parse_json("[{"), Err(FlowError::Json(_))));
    assert!(matches!(parse_json(r#"[{"source": "a"}]"#), Err(FlowError::Json(_))));
}

// ── Cursor ───────────────────────────────────────────────────────────────────

#[test]
fn test_cursor_eof() {
    assert!(Cursor::new("").eof());
    assert!(!Cursor::new("a").eof());
}

#[test]
fn test_cursor_peek_consume() {
    let mut c = Cursor::new("->rest");
    assert!(c.peek("->"));
    assert!(c.consume("->"));
    assert_eq!(c.pos, 2);
    assert!(!c.consume("->"));
}

#[test]
fn test_match_account_stops_at_arrow() {
    let mut c = Cursor::new("@users:alice->bank");
    assert_eq!(c.match_account().unwrap(), "users:alice");
    assert!(c.peek("->"));
}

#[test]
fn test_match_account_bare_sigil_is_none() {
    let mut c = Cursor::new("@ -> b");
    assert!(c.match_account().is_none());
}

// ── Text ─────────────────────────────────────────────────────────────────────

#[test]
fn test_parse_text_lines() {
    let src = "# deposit\n@world -> @users:alice USD/2 10000\n\nusers:alice->fees USD/2 250  # fee\n";
    let p = parse_text(src).unwrap();
    assert_eq!(
        p,
        vec![
            Posting::new("world", "users:alice", "USD/2 10000"),
            Posting::new("users:alice", "fees", "USD/2 250"),
        ]
    );
}

#[test]
fn test_parse_text_keeps_free_form_amount() {
    let p = parse_text("a -> b ten dollars").unwrap();
    assert_eq!(p[0].amount, "ten dollars");
}

#[test]
fn test_parse_text_missing_arrow_reports_line() {
    let err = parse_text("a -> b USD/2 1\na b USD/2 1").unwrap_err();
    match err {
        FlowError::Parse { line, message } => {
            assert_eq!(line, 2);
            assert!(message.contains("->"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_parse_text_missing_amount() {
    assert!(matches!(
        parse_text("a -> b"),
        Err(FlowError::Parse { line: 1, .. })
    ));
}

#[test]
fn test_parse_dispatches_on_detected_format() {
    let from_json = parse(r#"[{"amount":"USD/2 1","source":"a","destination":"b"}]"#, None).unwrap();
    let from_text = parse("a -> b USD/2 1", None).unwrap();
    assert_eq!(from_json, from_text);
}
