use crate::*;
use flate2::read::MultiGzDecoder;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

/// Sibling of `input` with a trailing `.gz` removed. Inputs without the
/// suffix map onto themselves.
pub fn output_path(input: &Path) -> PathBuf {
    match input.extension() {
        Some(extension) if extension == "gz" => input.with_extension(""),
        _ => input.to_path_buf(),
    }
}

/// Decompresses `input` next to itself and returns where it was written.
#[throws]
pub fn process(input: &Path, pretty: bool) -> PathBuf {
    let output = output_path(input);
    process_to(input, &output, pretty)?;
    output
}

/// Decompresses `input` into `output`. Refuses to run when both name the
/// same file, since the output is truncated before it is written.
#[throws]
pub fn process_to(input: &Path, output: &Path, pretty: bool) {
    if same_file(input, output) {
        throw!(Error::SamePath {
            path: output.to_path_buf(),
        });
    }
    let payload = decode(input)?;
    encode(&payload, output, pretty)?;
}

fn same_file(first: &Path, second: &Path) -> bool {
    first == second
        || matches!(
            (first.canonicalize(), second.canonicalize()),
            (Ok(first), Ok(second)) if first == second
        )
}

/// Reads the whole gzip stream at `input` (all members) and parses it as
/// a single JSON document.
#[throws]
pub fn decode(input: &Path) -> Value {
    let file = File::open(input).map_err(|source| Error::FileOpen {
        path: input.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    MultiGzDecoder::new(file)
        .read_to_end(&mut bytes)
        .map_err(|source| Error::GzipFormat {
            path: input.to_path_buf(),
            source,
        })?;
    debug!("Decompressed {} bytes from {}", bytes.len(), input.display());

    let payload: Value = serde_json::from_slice(&bytes).map_err(|source| Error::JsonDecode {
        path: input.to_path_buf(),
        source,
    })?;
    payload
}

/// Creates or truncates `output` and writes `payload` into it.
#[throws]
pub fn encode(payload: &Value, output: &Path, pretty: bool) {
    let file = File::create(output).map_err(|source| Error::FileCreate {
        path: output.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    write_json(&mut writer, payload, pretty).map_err(|source| Error::JsonEncode {
        path: output.to_path_buf(),
        source,
    })?;

    let file = writer.into_inner().map_err(|err| Error::FileWrite {
        path: output.to_path_buf(),
        source: err.into_error(),
    })?;
    drop(file);
    debug!("Wrote {} (pretty: {})", output.display(), pretty);
}

/// Serializes `payload` followed by a newline. Pretty output indents one tab
/// per nesting level; compact output has no inserted whitespace.
pub fn write_json<W: Write>(
    mut writer: W,
    payload: &Value,
    pretty: bool,
) -> serde_json::Result<()> {
    if pretty {
        let formatter = PrettyFormatter::with_indent(b"\t");
        let mut serializer = Serializer::with_formatter(&mut writer, formatter);
        payload.serialize(&mut serializer)?;
    } else {
        serde_json::to_writer(&mut writer, payload)?;
    }
    writer.write_all(b"\n").map_err(serde_json::Error::io)
}
