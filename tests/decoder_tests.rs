use pretty_assertions::assert_eq;
use simpleicon::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn bits(pixels: &[bool]) -> String {
    pixels.iter().map(|&p| if p { '1' } else { '0' }).collect()
}

fn row_bits(icon: &Icon) -> Vec<String> {
    icon.rows().map(bits).collect()
}

/// Deterministic pseudo-random bit string.
fn pattern(len: usize, seed: u32) -> String {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            if state & 1 == 1 {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}

#[test]
fn test_decode_smiley_version1() {
    let icon = icon_decode("Smiley;;1;;4x2;;11001111").expect("Decoding should succeed");

    assert_eq!(icon.name(), "Smiley");
    assert_eq!(icon.version(), FormatVersion::RowMajor);
    assert_eq!((icon.width(), icon.height()), (4, 2));
    assert_eq!(icon.row(0), Some(&[true, true, false, false][..]));
    assert_eq!(icon.row(1), Some(&[true, true, true, true][..]));
    assert_eq!(icon.row(2), None);
}

#[test]
fn test_decode_box_version2() {
    let icon = icon_decode("Box;;2;;12x2;;110001101111110101001111").expect("Decoding should succeed");

    assert_eq!(icon.version(), FormatVersion::Chunked);
    assert_eq!(
        row_bits(&icon),
        vec!["110001100100".to_string(), "111111011111".to_string()]
    );
}

#[test]
fn test_pixel_accessor() {
    let icon = icon_decode("Smiley;;1;;4x2;;11001111").unwrap();

    assert_eq!(icon.pixel(0, 0), Some(true));
    assert_eq!(icon.pixel(2, 0), Some(false));
    assert_eq!(icon.pixel(3, 1), Some(true));
    assert_eq!(icon.pixel(4, 0), None, "x past the width");
    assert_eq!(icon.pixel(0, 2), None, "y past the height");
    assert_eq!(icon.pixels().len(), 8);
    assert_eq!(icon.set_pixel_count(), 6);
}

#[test]
fn test_version1_reflattens_to_data_prefix() {
    for (seed, (width, height)) in [(1, 1), (3, 5), (8, 8), (13, 7), (32, 2)].into_iter().enumerate() {
        let data = pattern(width * height + seed * 3, seed as u32 + 7);
        let text = format!("p;;1;;{width}x{height};;{data}");
        let icon = icon_decode(&text).unwrap();

        assert_eq!(bits(icon.pixels()), &data[..width * height], "size {width}x{height}");
    }
}

#[test]
fn test_version2_single_chunk_matches_version1() {
    for width in 1..=8 {
        let height = 5;
        let data = pattern(width * height, width as u32);
        let v1 = icon_decode(&format!("p;;1;;{width}x{height};;{data}")).unwrap();
        let v2 = icon_decode(&format!("p;;2;;{width}x{height};;{data}")).unwrap();

        assert_eq!(v1.pixels(), v2.pixels(), "width {width}");
    }
}

#[test]
fn test_version2_chunk_order() {
    // Columns 0-7 of every row come first, then columns 8-15
    let rows = ["1010101011110000", "0000111100110011", "1111111100000001"];
    let mut data = String::new();
    for row in rows {
        data.push_str(&row[..8]);
    }
    for row in rows {
        data.push_str(&row[8..]);
    }

    let icon = icon_decode(&format!("c;;2;;16x3;;{data}")).unwrap();
    assert_eq!(row_bits(&icon), rows.map(String::from).to_vec());
}

#[test]
fn test_decode_is_idempotent() {
    let text = "Box;;2;;12x2;;110001101111110101001111";
    let first = icon_decode(text).unwrap();
    let second = icon_decode(text).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.pixels(), second.pixels());
}

#[test]
fn test_from_str() {
    let icon: Icon = "Smiley;;1;;4x2;;11001111".parse().unwrap();
    assert_eq!(icon, icon_decode("Smiley;;1;;4x2;;11001111").unwrap());
}

#[test]
fn test_lines_are_joined_without_separator() {
    let wrapped = "Smi\nley;;1;;4x2;;\n1100\n1111\n";
    let icon = icon_decode(wrapped).unwrap();

    assert_eq!(icon.name(), "Smiley");
    assert_eq!(row_bits(&icon), vec!["1100".to_string(), "1111".to_string()]);
}

#[test]
fn test_wrong_field_count_is_format_error() {
    for text in [
        "",
        "Smiley",
        "Smiley;;1;;4x2",
        "Smiley;;1;;4x2;;1100;;1111",
        "Smiley;1;4x2;11001111",
    ] {
        let err = icon_decode(text).expect_err("Decoding should fail");
        assert!(
            matches!(err, IconError::Format(FormatError::FieldCount { expected: 4, .. })),
            "{text:?} gave {err:?}"
        );
    }
}

#[test]
fn test_unsupported_version() {
    let err = icon_decode("Smiley;;3;;4x2;;11001111").unwrap_err();
    assert!(matches!(
        err,
        IconError::Format(FormatError::UnsupportedVersion(3))
    ));
}

#[test]
fn test_non_numeric_header_fields() {
    let err = icon_decode("Smiley;;v1;;4x2;;11001111").unwrap_err();
    assert!(matches!(
        err,
        IconError::Format(FormatError::InvalidNumber { field: "version", .. })
    ));

    let err = icon_decode("Smiley;;1;;fourx2;;11001111").unwrap_err();
    assert!(matches!(
        err,
        IconError::Format(FormatError::InvalidNumber { field: "width", .. })
    ));

    let err = icon_decode("Smiley;;1;;4*2;;11001111").unwrap_err();
    assert!(matches!(
        err,
        IconError::Format(FormatError::InvalidSize { .. })
    ));
}

#[test]
fn test_truncated_data() {
    let err = icon_decode("Smiley;;1;;4x2;;1100111").unwrap_err();
    assert!(matches!(
        err,
        IconError::Format(FormatError::TruncatedData {
            needed: 8,
            actual: 7
        })
    ));

    // The second chunk is one character short
    let err = icon_decode("Box;;2;;12x2;;11000110111111010100111").unwrap_err();
    assert!(matches!(
        err,
        IconError::Format(FormatError::TruncatedData { needed: 24, .. })
    ));
}

#[test]
fn test_error_messages() {
    let err = icon_decode("a;;1;;2x2;;1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "format error: truncated pixel data: need 4 characters, got 1"
    );

    let err = icon_decode("a;;7;;2x2;;1111").unwrap_err();
    assert_eq!(
        err.to_string(),
        "format error: unsupported version: 7 (expected 1 or 2)"
    );
}

#[test]
fn test_load_fixtures() {
    let v1 = load(fixture("schwert.txt")).expect("Loading version 1 fixture should work");
    let v2 = load(fixture("schwert2.txt")).expect("Loading version 2 fixture should work");

    assert_eq!(v1.name(), "Schwert");
    assert_eq!((v1.width(), v1.height()), (16, 16));
    assert_eq!(v1.version(), FormatVersion::RowMajor);
    assert_eq!(v2.version(), FormatVersion::Chunked);
    assert_eq!(v1.pixels(), v2.pixels(), "Both layouts encode the same sword");
    assert_eq!(bits(v1.row(0).unwrap()), "0000000000000011");
    assert_eq!(bits(v1.row(15).unwrap()), "1100000000000000");
}

#[test]
fn test_load_crlf_fixture() {
    let icon = load(fixture("box.txt")).unwrap();
    assert_eq!(
        row_bits(&icon),
        vec!["110001100100".to_string(), "111111011111".to_string()]
    );
}

#[test]
fn test_load_truncated_fixture() {
    let err = load(fixture("truncated.txt")).unwrap_err();
    assert!(matches!(
        err,
        IconError::Format(FormatError::TruncatedData {
            needed: 64,
            actual: 16
        })
    ));
}

#[test]
fn test_load_missing_file() {
    let err = load(fixture("does_not_exist.txt")).unwrap_err();
    match err {
        IconError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn test_load_from_reader() {
    let icon = load_from_reader(&b"Smiley;;1;;4x2;;\n1100\n1111\n"[..]).unwrap();
    assert_eq!(icon.set_pixel_count(), 6);

    let err = load_from_reader(&b"bad;;1;;1x1;;\xff"[..]).unwrap_err();
    assert!(matches!(err, IconError::Io(_)), "invalid UTF-8 is an I/O error");
}
