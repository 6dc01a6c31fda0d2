//! Integration tests for the TNEF container reader, the MAPI property
//! reader and attachment export, on synthetic containers built in-process.

use tnefshell::error::TnefError;
use tnefshell::model::property::{prop_id, prop_type, MV_FLAG};
use tnefshell::parser::tnef::{attr, level, Records, RECORD_OVERHEAD, TNEF_SIGNATURE};
use tnefshell::parser::{decode, decode_file};

// ─── Builders ───────────────────────────────────────────────────────

fn container(records: &[Vec<u8>]) -> Vec<u8> {
    let mut buf = TNEF_SIGNATURE.to_le_bytes().to_vec();
    buf.extend_from_slice(&0x1c2bu16.to_le_bytes());
    for r in records {
        buf.extend_from_slice(r);
    }
    buf
}

fn record(lvl: u8, name: u16, payload: &[u8]) -> Vec<u8> {
    let mut buf = vec![lvl];
    buf.extend_from_slice(&name.to_le_bytes());
    buf.extend_from_slice(&0x0006u16.to_le_bytes());
    buf.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    buf.extend_from_slice(payload);
    let checksum = payload.iter().fold(0u16, |acc, &b| acc.wrapping_add(b as u16));
    buf.extend_from_slice(&checksum.to_le_bytes());
    buf
}

fn pad4(buf: &mut Vec<u8>) {
    while buf.len() % 4 != 0 {
        buf.push(0);
    }
}

/// A variable-size property with a single value.
fn variable_prop(ty: u16, name: u16, value: &[u8]) -> Vec<u8> {
    let mut buf = ty.to_le_bytes().to_vec();
    buf.extend_from_slice(&name.to_le_bytes());
    buf.extend_from_slice(&1u32.to_le_bytes());
    buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
    buf.extend_from_slice(value);
    pad4(&mut buf);
    buf
}

fn props_payload(count: u32, props: &[Vec<u8>]) -> Vec<u8> {
    let mut buf = count.to_le_bytes().to_vec();
    for p in props {
        buf.extend_from_slice(p);
    }
    buf
}

// ─── Marker ─────────────────────────────────────────────────────────

#[test]
fn test_wrong_marker_is_rejected_without_partial_result() {
    for data in [
        Vec::new(),
        vec![0x78, 0x9f, 0x3e],
        b"From user@example.com".to_vec(),
        {
            let mut d = container(&[record(level::MESSAGE, 0x8004, b"x")]);
            d[0] ^= 0xff;
            d
        },
    ] {
        assert!(
            matches!(decode(&data), Err(TnefError::MissingMarker)),
            "input {data:?}"
        );
    }
}

// ─── Cursor accounting ──────────────────────────────────────────────

#[test]
fn test_records_cover_buffer_exactly() {
    let payloads: [&[u8]; 4] = [b"", b"a", b"abcdefg", &[0u8; 300]];
    let records: Vec<Vec<u8>> = payloads
        .iter()
        .map(|p| record(level::MESSAGE, 0x8004, p))
        .collect();
    let data = container(&records);

    let mut consumed = 6usize;
    for (rec, payload) in Records::new(&data).unwrap().zip(payloads) {
        let rec = rec.unwrap();
        assert_eq!(rec.offset as usize, consumed);
        assert_eq!(rec.consumed_len, RECORD_OVERHEAD + payload.len());
        assert_eq!(rec.payload, payload);
        consumed += rec.consumed_len;
    }
    assert_eq!(consumed, data.len());
}

// ─── Attachments ────────────────────────────────────────────────────

#[test]
fn test_attachment_title_and_data() {
    let content: Vec<u8> = (0u8..50).collect();
    let data = container(&[
        record(level::ATTACHMENT, attr::ATTACH_REND_DATA, &[0; 14]),
        record(level::ATTACHMENT, attr::ATTACH_TITLE, b"AUTHORS\x00"),
        record(level::ATTACHMENT, attr::ATTACH_DATA, &content),
    ]);
    let result = decode(&data).unwrap();
    assert_eq!(result.attachments.len(), 1);
    assert_eq!(result.attachments[0].title, "AUTHORS");
    assert_eq!(result.attachments[0].data.len(), 50);
    assert_eq!(result.attachments[0].data, content);
}

#[test]
fn test_attachment_without_title_or_data_stays_empty() {
    let data = container(&[
        record(level::ATTACHMENT, attr::ATTACH_REND_DATA, &[0; 14]),
        record(level::ATTACHMENT, attr::ATTACH_TITLE, b"only-title\0"),
        record(level::ATTACHMENT, attr::ATTACH_REND_DATA, &[0; 14]),
        record(level::ATTACHMENT, attr::ATTACH_DATA, b"only-data"),
        record(level::ATTACHMENT, attr::ATTACH_REND_DATA, &[0; 14]),
    ]);
    let result = decode(&data).unwrap();
    assert_eq!(result.attachments.len(), 3);
    assert_eq!(result.attachments[0].title, "only-title");
    assert!(result.attachments[0].data.is_empty());
    assert!(result.attachments[1].title.is_empty());
    assert_eq!(result.attachments[1].data, b"only-data");
    assert!(result.attachments[2].title.is_empty());
    assert!(result.attachments[2].data.is_empty());
}

#[test]
fn test_attachment_level_record_before_marker_is_an_error() {
    let data = container(&[
        record(level::MESSAGE, 0x8004, b"subject\0"),
        record(level::ATTACHMENT, attr::ATTACH_DATA, b"orphan"),
    ]);
    let err = decode(&data).unwrap_err();
    match err {
        TnefError::PrecedingStateMissing { offset } => {
            assert_eq!(offset as usize, 6 + RECORD_OVERHEAD + 8)
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ─── MAPI properties ────────────────────────────────────────────────

#[test]
fn test_body_from_mapi_properties() {
    let payload = props_payload(1, &[variable_prop(prop_type::STRING, prop_id::BODY, b"hello")]);
    let data = container(&[record(level::MESSAGE, attr::MAPI_PROPS, &payload)]);
    let result = decode(&data).unwrap();
    assert_eq!(result.body, b"hello");
    assert!(result.body_html.is_empty());
    assert_eq!(result.properties.len(), 1);
    assert_eq!(result.body_text().as_deref(), Some("hello"));
}

#[test]
fn test_body_and_html_with_other_properties() {
    let mut subject = prop_type::SHORT.to_le_bytes().to_vec();
    subject.extend_from_slice(&0x0017u16.to_le_bytes());
    subject.extend_from_slice(&[1, 0, 0, 0]);

    let payload = props_payload(
        3,
        &[
            subject,
            variable_prop(prop_type::STRING, prop_id::BODY, b"plain"),
            variable_prop(prop_type::BINARY, prop_id::BODY_HTML, b"<p>hi</p>"),
        ],
    );
    let data = container(&[
        record(level::MESSAGE, 0x9006, &[0, 0, 1, 0]),
        record(level::MESSAGE, attr::MAPI_PROPS, &payload),
    ]);
    let result = decode(&data).unwrap();
    assert_eq!(result.body, b"plain");
    assert_eq!(result.body_html, b"<p>hi</p>");
    assert_eq!(result.body_html_text().as_deref(), Some("<p>hi</p>"));
    assert_eq!(result.properties.len(), 3);
    assert_eq!(result.property(0x0017).unwrap().data, vec![1, 0]);
}

#[test]
fn test_later_properties_record_replaces_list_and_keeps_absent_bodies() {
    let first = props_payload(
        2,
        &[
            variable_prop(prop_type::STRING, prop_id::BODY, b"first"),
            variable_prop(prop_type::BINARY, prop_id::BODY_HTML, b"<b>"),
        ],
    );
    let mut flag = prop_type::SHORT.to_le_bytes().to_vec();
    flag.extend_from_slice(&0x0017u16.to_le_bytes());
    flag.extend_from_slice(&[2, 0, 0, 0]);
    let second = props_payload(
        2,
        &[
            variable_prop(prop_type::STRING, prop_id::BODY, b"second"),
            flag,
        ],
    );
    let data = container(&[
        record(level::MESSAGE, attr::MAPI_PROPS, &first),
        record(level::MESSAGE, attr::MAPI_PROPS, &second),
    ]);

    let result = decode(&data).unwrap();
    assert_eq!(result.body, b"second");
    assert_eq!(result.body_html, b"<b>");
    assert_eq!(result.properties.len(), 2);
    assert_eq!(result.properties[0].name, prop_id::BODY);
    assert_eq!(result.properties[1].name, 0x0017);
    assert!(result.property(prop_id::BODY_HTML).is_none());
}

#[test]
fn test_single_short_property_roundtrip() {
    let mut prop = prop_type::SHORT.to_le_bytes().to_vec();
    prop.extend_from_slice(&0x0026u16.to_le_bytes());
    prop.extend_from_slice(&[5, 0, 0, 0]);
    let payload = props_payload(1, &[prop]);
    let data = container(&[record(level::MESSAGE, attr::MAPI_PROPS, &payload)]);

    let result = decode(&data).unwrap();
    assert_eq!(result.properties.len(), 1);
    let p = &result.properties[0];
    assert_eq!(p.data.len(), 2);
    assert_eq!(p.name, 0x0026);
    assert_eq!(p.prop_type, prop_type::SHORT);
}

#[test]
fn test_padding_law_for_short_values() {
    for len in 0..=5usize {
        let value = vec![0x5a; len];
        let payload = props_payload(
            2,
            &[
                variable_prop(prop_type::BINARY, 0x0ff9, &value),
                variable_prop(prop_type::STRING, prop_id::BODY, b"tail"),
            ],
        );
        // count + header + value count + length + value + padding
        let first_len = 4 + 4 + 4 + len + (4 - len % 4) % 4;
        assert_eq!(payload.len(), 4 + first_len + 16);

        let data = container(&[record(level::MESSAGE, attr::MAPI_PROPS, &payload)]);
        let result = decode(&data).unwrap();
        assert_eq!(result.properties[0].data, value, "len {len}");
        assert_eq!(result.body, b"tail", "len {len}");
    }
}

#[test]
fn test_multi_value_binary_keeps_value_spans() {
    let mut prop = (prop_type::BINARY | MV_FLAG).to_le_bytes().to_vec();
    prop.extend_from_slice(&0x3a53u16.to_le_bytes());
    prop.extend_from_slice(&2u32.to_le_bytes());
    for v in [&b"abc"[..], &b"defgh"[..]] {
        prop.extend_from_slice(&(v.len() as u32).to_le_bytes());
        prop.extend_from_slice(v);
        pad4(&mut prop);
    }
    let payload = props_payload(1, &[prop]);
    let data = container(&[record(level::MESSAGE, attr::MAPI_PROPS, &payload)]);
    let result = decode(&data).unwrap();
    let p = &result.properties[0];
    assert!(p.multi_value);
    assert_eq!(p.data, b"abcdefgh");
    let values: Vec<&[u8]> = p.values().collect();
    assert_eq!(values, vec![&b"abc"[..], &b"defgh"[..]]);
}

#[test]
fn test_implausible_value_count_is_an_error() {
    let mut prop = (prop_type::INT | MV_FLAG).to_le_bytes().to_vec();
    prop.extend_from_slice(&0x3a53u16.to_le_bytes());
    prop.extend_from_slice(&2000u32.to_le_bytes());
    prop.extend_from_slice(&[0u8; 100]);
    let payload = props_payload(1, &[prop]);
    let data = container(&[record(level::MESSAGE, attr::MAPI_PROPS, &payload)]);
    assert!(matches!(
        decode(&data),
        Err(TnefError::ImplausibleCount { count: 2000, .. })
    ));
}

#[test]
fn test_truncated_property_value_is_an_error() {
    let mut payload = props_payload(1, &[variable_prop(prop_type::BINARY, 0x0ff9, &[1; 8])]);
    // Claim 64 bytes for an 8-byte value.
    payload[12..16].copy_from_slice(&64u32.to_le_bytes());
    let data = container(&[record(level::MESSAGE, attr::MAPI_PROPS, &payload)]);
    let err = decode(&data).unwrap_err();
    assert!(err.is_format_error());
    assert!(matches!(err, TnefError::TruncatedInput { needed: 64, .. }));
}

#[test]
fn test_overrunning_record_length_is_an_error() {
    let mut data = container(&[record(level::MESSAGE, 0x8004, b"abc")]);
    data[6 + 5..6 + 9].copy_from_slice(&1_000_000u32.to_le_bytes());
    assert!(matches!(
        decode(&data),
        Err(TnefError::TruncatedInput { .. })
    ));
}

// ─── Files and export ───────────────────────────────────────────────

#[test]
fn test_decode_file_and_export() {
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    let temp = assert_fs::TempDir::new().unwrap();
    let payload = props_payload(1, &[variable_prop(prop_type::STRING, prop_id::BODY, b"hi")]);
    let input = temp.child("winmail.dat");
    input
        .write_binary(&container(&[
            record(level::MESSAGE, attr::MAPI_PROPS, &payload),
            record(level::ATTACHMENT, attr::ATTACH_REND_DATA, &[0; 14]),
            record(level::ATTACHMENT, attr::ATTACH_TITLE, b"notes.txt\0"),
            record(level::ATTACHMENT, attr::ATTACH_DATA, b"some notes"),
        ]))
        .unwrap();

    let result = decode_file(input.path()).unwrap();
    assert_eq!(result.attachments.len(), 1);

    let out = temp.child("out");
    let opts = tnefshell::export::attachment::ExtractOptions {
        max_file_size: 1024 * 1024,
        write_bodies: true,
        max_filename_len: 150,
    };
    let stats = tnefshell::export::attachment::export_bulk(
        &[input.path().to_path_buf(), temp.path().join("missing.dat")],
        out.path(),
        &opts,
        &|_, _| {},
    )
    .unwrap();

    assert_eq!(stats.files_decoded, 1);
    assert_eq!(stats.files_failed, 1);
    assert_eq!(stats.written.len(), 2);
    out.child("winmail/notes.txt")
        .assert(predicate::str::contains("some notes"));
    out.child("winmail/body.txt").assert("hi");
    out.child("winmail/body.html").assert(predicate::path::missing());
}
