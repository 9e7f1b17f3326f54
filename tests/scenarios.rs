use bytes::Bytes;
use rbencode::bencode::{decode_dict, peek_kind, Kind};
use rbencode::{decode, decode_with_options, encode, DecodeOptions, ErrorKind, Value};

fn assert_rejects(data: &[u8], kind: ErrorKind, offset: usize) {
    let err = decode(data).unwrap_err();
    assert_eq!(err.kind(), kind, "kind for {:?}", String::from_utf8_lossy(data));
    assert_eq!(err.offset(), offset, "offset for {:?}", String::from_utf8_lossy(data));
}

#[test]
fn integer_scenario() {
    assert_eq!(decode(b"i42e").unwrap(), Value::integer(42));
    assert_eq!(encode(&Value::integer(42)), b"i42e");
}

#[test]
fn byte_string_scenario() {
    let value = decode(b"4:spam").unwrap();
    assert_eq!(value, Value::string("spam"));
    assert_eq!(encode(&value), b"4:spam");
}

#[test]
fn list_scenario() {
    let value = decode(b"l4:spam4:eggse").unwrap();
    assert_eq!(
        value,
        Value::list([Value::string("spam"), Value::string("eggs")])
    );
    assert_eq!(encode(&value), b"l4:spam4:eggse");
}

#[test]
fn dictionary_scenario() {
    let value = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
    assert_eq!(
        value,
        Value::dict([
            ("cow", Value::string("moo")),
            ("spam", Value::string("eggs")),
        ])
    );
    assert_eq!(encode(&value), b"d3:cow3:moo4:spam4:eggse");
}

#[test]
fn canonical_rejections() {
    assert_rejects(b"d4:spam4:eggs3:cow3:mooe", ErrorKind::UnsortedKeys, 13);
    assert_rejects(b"d3:cow3:moo3:cow3:mooe", ErrorKind::DuplicateKey, 11);
    assert_rejects(b"i01e", ErrorKind::InvalidLeadingZero, 1);
    assert_rejects(b"i-0e", ErrorKind::InvalidNegativeZero, 1);
    assert_rejects(b"01:a", ErrorKind::InvalidLeadingZero, 0);
    assert_eq!(decode(b"i0e").unwrap(), Value::integer(0));
    assert_eq!(decode(b"0:").unwrap(), Value::bytes(Bytes::new()));
}

#[test]
fn truncation_and_trailing_data() {
    assert_rejects(b"4:sp", ErrorKind::UnexpectedEnd, 4);
    assert_eq!(decode(b"i1e").unwrap(), Value::integer(1));
    for extra in [b'i', b'e', b'0', b' ', b'\n', 0xff] {
        let mut data = b"i1e".to_vec();
        data.push(extra);
        assert_rejects(&data, ErrorKind::TrailingData, 3);
    }
}

#[test]
fn depth_guard() {
    let options = DecodeOptions::new().max_depth(8);
    let nested = |depth: usize| {
        let mut data = b"d1:k".repeat(depth);
        data.extend_from_slice(b"i0e");
        data.extend(std::iter::repeat(b'e').take(depth));
        data
    };

    assert!(decode_with_options(&nested(8), &options).is_ok());
    let err = decode_with_options(&nested(9), &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DepthExceeded);
    assert_eq!(err.offset(), 8 * 4);
}

#[test]
fn torrent_like_document() {
    let info = Value::dict([
        ("length", Value::integer(1024)),
        ("name", Value::string("example.txt")),
        ("piece length", Value::integer(16384)),
        ("pieces", Value::bytes(vec![0xabu8; 20])),
    ]);
    let torrent = Value::dict([
        ("announce", Value::string("http://tracker.example.com/announce")),
        ("info", info.clone()),
    ]);

    let encoded = encode(&torrent);
    assert_eq!(peek_kind(&encoded).unwrap(), Kind::Dict);

    let dict = decode_dict(&encoded).unwrap();
    assert_eq!(dict.get(b"info".as_slice()), Some(&info));
    assert_eq!(
        torrent.get(b"info").and_then(|i| i.get(b"name")).and_then(Value::as_str),
        Some("example.txt")
    );
}
