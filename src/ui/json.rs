//! NDJSON output: one JSON object per line on stdout.

use serde::Serialize;
use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes a raw JSON value to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Emit a typed event, adding `"event": <name>` to its fields.
pub fn emit_event<T: Serialize>(name: &str, payload: &T) -> io::Result<()> {
    emit(tagged(name, payload)?)
}

fn tagged<T: Serialize>(name: &str, payload: &T) -> io::Result<serde_json::Value> {
    let mut value =
        serde_json::to_value(payload).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    match value.as_object_mut() {
        Some(map) => {
            map.insert("event".to_string(), serde_json::Value::from(name));
            Ok(value)
        }
        None => Ok(serde_json::json!({ "event": name, "data": value })),
    }
}
