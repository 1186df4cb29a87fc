use flate2::{write::GzEncoder, Compression};
use jsonx::{
    config::{self, Config},
    pipeline, Error,
};
use serde_json::Value;
use std::{fs, io::Write, path::Path};
use tempfile::tempdir;

const DOCUMENTS: &[&str] = &[
    r#"{"user":{"id":7,"roles":["admin","dev"],"active":true,"manager":null}}"#,
    r#"[1,2.25,-3,1e10,"x",[[],{}],{"nested":{"deeper":{"deepest":[false]}}}]"#,
    r#""a_lone_string""#,
    "42",
    "null",
];

fn gzip(path: &Path, content: &str) {
    let mut encoder = GzEncoder::new(fs::File::create(path).unwrap(), Compression::best());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

fn decompress(document: &str, pretty: bool) -> String {
    let temp = tempdir().unwrap();
    let input = temp.path().join("doc.json.gz");
    gzip(&input, document);
    let output = pipeline::process(&input, pretty).unwrap();
    fs::read_to_string(output).unwrap()
}

#[test]
fn output_decodes_to_the_input_value() {
    for document in DOCUMENTS {
        let expected: Value = serde_json::from_str(document).unwrap();
        for pretty in [true, false] {
            let written: Value = serde_json::from_str(&decompress(document, pretty)).unwrap();
            assert_eq!(written, expected, "pretty: {}", pretty);
        }
    }
}

#[test]
fn pretty_without_whitespace_is_compact() {
    for document in DOCUMENTS {
        let pretty: String = decompress(document, true)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let compact = decompress(document, false);
        assert_eq!(pretty, compact.trim_end());
    }
}

#[test]
fn config_defaults_then_persists() {
    let temp = tempdir().unwrap();
    let path = temp.path().join(config::CONFIG_FILE);

    assert_eq!(config::load_from(&path).unwrap().editor, "TextEdit");
    assert!(!path.exists());

    config::save_to(&path, &Config::new("Vim")).unwrap();
    assert_eq!(config::load_from(&path).unwrap(), Config::new("Vim"));
}

#[test]
fn invalid_gzip_leaves_no_output() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("archive.json.gz");
    fs::write(&input, b"\x1f\x8b\x08garbage").unwrap();

    assert!(matches!(
        pipeline::process(&input, true),
        Err(Error::GzipFormat { .. })
    ));
    assert!(!temp.path().join("archive.json").exists());
}
