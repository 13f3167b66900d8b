use crate::Error;
use serde::Deserialize;
use serde_json::Value;
use std::io::{BufWriter, Read, Write};

/// Decodes one JSON value from `reader` and writes it to `writer` as YAML.
///
/// Only the first JSON value is read; whatever follows it is left alone,
/// even when it directly touches a bare scalar (`123abc`).
/// The output is flushed before this returns.
pub fn convert<R: Read, W: Write>(reader: R, writer: W) -> Result<(), Error> {
    let value = decode(reader)?;
    encode(&value, writer)
}

fn decode<R: Read>(reader: R) -> Result<Value, Error> {
    let mut de = serde_json::Deserializer::from_reader(reader);
    // No `de.end()`: trailing input is never read
    Value::deserialize(&mut de)
        .map_err(|e| Error::Decode(format!("Failed to decode input JSON: {}", e)))
}

fn encode<W: Write>(value: &Value, writer: W) -> Result<(), Error> {
    let mut writer = BufWriter::new(writer);
    let result = serde_yaml::to_writer(&mut writer, value)
        .map_err(|e| Error::Encode(format!("Failed to encode output YAML: {}", e)));
    // Flush even on failure so partial output isn't lost
    let flushed = writer
        .flush()
        .map_err(|e| Error::Encode(format!("Failed to flush output: {}", e)));
    result.and(flushed)
}
