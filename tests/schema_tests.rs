mod common;

use common::{cols, record};
use prdlog::core::schema::{Delimiter, parse_header, reconcile, sniff_delimiter};
use prdlog::core::serialize::serialize;
use prdlog::models::record::{Record, Value};

#[test]
fn test_sniff_delimiter() {
    assert_eq!(sniff_delimiter(b"a;b;c\n1;2;3\n"), Delimiter::Semicolon);
    assert_eq!(sniff_delimiter(b"a,b,c\n1,2,3\n"), Delimiter::Comma);
    // tie goes to semicolon
    assert_eq!(sniff_delimiter(b"a,b;c\n"), Delimiter::Semicolon);
    assert_eq!(sniff_delimiter(b""), Delimiter::Semicolon);
    // only the first line counts
    assert_eq!(sniff_delimiter(b"a;b\n1,2,3,4,5\n"), Delimiter::Semicolon);
}

#[test]
fn test_parse_header_trims_and_unquotes() {
    let header = parse_header(b"\xEF\xBB\xBF A ;\"B\"; C\r\n1;2;3\n", Delimiter::Semicolon).unwrap();
    assert_eq!(header, cols(&["A", "B", "C"]));
}

#[test]
fn test_parse_header_rejects_garbage() {
    assert!(parse_header(b"\xff\xfe;\x00\n", Delimiter::Semicolon).is_err());
    assert!(parse_header(b" ; ;\n1;2\n", Delimiter::Semicolon).is_err());
}

#[test]
fn test_reconcile_then_serialize() {
    let rec = Record::new().with("A", 1i64).with("B", 2i64);
    let schema = cols(&["A", "B", "C"]);

    let rec = reconcile(&schema, rec);
    assert_eq!(rec.get("C"), Some(&Value::Text(String::new())));
    assert_eq!(rec.keys(), schema);

    let line = serialize(&schema, &rec, Delimiter::Semicolon).unwrap();
    assert_eq!(line, "1;2;\n");
}

#[test]
fn test_reconcile_keeps_extra_keys_but_serializer_skips_them() {
    let rec = record(&[("A", "x"), ("EXTRA", "y")]);
    let schema = cols(&["A", "B"]);

    let rec = reconcile(&schema, rec);
    assert!(rec.contains("EXTRA"));
    assert_eq!(serialize(&schema, &rec, Delimiter::Comma).unwrap(), "x,\n");
}

#[test]
fn test_serialize_quotes_only_when_needed() {
    let schema = cols(&["A", "B", "C", "D"]);
    let rec = record(&[("A", "a;b"), ("B", "say \"hi\""), ("C", "two\nlines"), ("D", "a,b")]);

    let line = serialize(&schema, &rec, Delimiter::Semicolon).unwrap();
    assert_eq!(line, "\"a;b\";\"say \"\"hi\"\"\";\"two\nlines\";a,b\n");

    let line = serialize(&schema, &rec, Delimiter::Comma).unwrap();
    assert!(line.ends_with(",\"a,b\"\n"));
    assert!(line.starts_with("a;b,"));
}

#[test]
fn test_serialize_missing_and_absent_values_are_empty() {
    let schema = cols(&["A", "B", "C"]);
    let rec = Record::new().with("B", Value::Absent);
    assert_eq!(serialize(&schema, &rec, Delimiter::Semicolon).unwrap(), ";;\n");
}
