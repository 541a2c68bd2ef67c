#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::{json, Value};

use tallylog_core::TrackRecord;

#[test]
fn line_is_single_json_object_with_newline() {
    let rec = TrackRecord::from_json_slice(br#"{"a":1,"b":"x\ny"}"#).unwrap();
    let line = rec.to_line().unwrap();

    assert!(line.ends_with('\n'));
    assert_eq!(line.matches('\n').count(), 1, "embedded newlines must stay escaped");

    let back: Value = serde_json::from_str(line.trim_end()).unwrap();
    assert_eq!(back, json!({ "a": 1, "b": "x\ny" }));
}

#[test]
fn field_order_is_preserved() {
    let rec = TrackRecord::from_json_slice(br#"{"z":1,"a":2,"m":3}"#).unwrap();
    assert_eq!(rec.to_line().unwrap(), "{\"z\":1,\"a\":2,\"m\":3}\n");
}

#[test]
fn non_object_json_is_bad_request() {
    for body in [&b"[1,2]"[..], b"5", b"\"count\"", b"null", b"{not json"] {
        let err = TrackRecord::from_json_slice(body).expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    }
}

#[test]
fn form_pairs_become_strings_and_last_wins() {
    let rec = TrackRecord::from_pairs([("c", "3"), ("d", "4"), ("c", "5")]);
    assert_eq!(serde_json::to_value(&rec).unwrap(), json!({ "c": "5", "d": "4" }));
}

#[test]
fn count_field_detection() {
    let with = TrackRecord::from_json_slice(br#"{"count":10}"#).unwrap();
    assert_eq!(with.count(), Some(&json!(10)));

    let zero = TrackRecord::from_json_slice(br#"{"count":0}"#).unwrap();
    assert_eq!(zero.count(), Some(&json!(0)));

    let null = TrackRecord::from_json_slice(br#"{"count":null}"#).unwrap();
    assert!(null.count().is_none());

    let without = TrackRecord::from_json_slice(br#"{"a":1}"#).unwrap();
    assert!(without.count().is_none());
}
