use emsesp_i18n::formats::FormatType;
use emsesp_i18n::{Codec, Error, ReadOptions, convert_with, locales, read_table};
use std::fs;

const FORMATS: [FormatType; 3] = [FormatType::FlatJson, FormatType::TableJson, FormatType::Csv];

#[test]
fn builtin_table_survives_every_format_pair() {
    let italian = locales::italian();
    let tmp = tempfile::tempdir().expect("tempdir");

    for input_format in FORMATS {
        let input = tmp.path().join(format!("in/it.{}", input_format.extension()));
        emsesp_i18n::write_table(italian, &input, input_format).expect("write input");

        for output_format in FORMATS {
            let output = tmp
                .path()
                .join(format!("out-{}/it.{}", input_format, output_format.extension()));
            convert_with(
                &input,
                Some(input_format),
                &output,
                Some(output_format),
                &ReadOptions::new(),
            )
            .unwrap_or_else(|e| panic!("{} -> {}: {}", input_format, output_format, e));

            let table = read_table(&output, &ReadOptions::new()).expect("read output");
            assert_eq!(
                table.entries(),
                italian.entries(),
                "{} -> {}",
                input_format,
                output_format
            );
            assert_eq!(table.pending_keys().count(), 2);
        }
    }
}

#[test]
fn language_comes_from_directory_layout() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("i18n").join("it").join("index.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, r#"{"LANGUAGE": "Lingua"}"#).unwrap();

    let mut codec = Codec::new();
    codec
        .read_file(&path, &ReadOptions::new().with_strict(true))
        .expect("read");
    assert_eq!(codec.languages(), vec!["it"]);
}

#[test]
fn utf16_input_with_bom_is_decoded() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("it.json");

    let mut bytes = vec![0xFF, 0xFE];
    for unit in r#"{"ALL": "Tutto", "QUALITY": "QUALITÂ"}"#.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(&path, bytes).unwrap();

    let table = read_table(&path, &ReadOptions::new()).expect("read");
    assert_eq!(table.text("QUALITY"), Some("QUALITÂ"));
}

#[test]
fn broken_files_report_their_cause() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let json = tmp.path().join("it.json");
    fs::write(&json, r#"{"A": "x", "A": "y"}"#).unwrap();
    assert!(matches!(
        read_table(&json, &ReadOptions::new()),
        Err(Error::DuplicateKey(_))
    ));

    let csv = tmp.path().join("it.csv");
    fs::write(&csv, "key,index,value,status\nL,3,x,\n").unwrap();
    assert!(matches!(
        read_table(&csv, &ReadOptions::new()),
        Err(Error::InvalidResource(_))
    ));

    let missing = tmp.path().join("de.json");
    assert!(matches!(
        read_table(&missing, &ReadOptions::new()),
        Err(Error::Io(_))
    ));
}
