use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use anue_core::{FeedPayload, Result};

/// Persists the raw payload as indented UTF-8 JSON. Non-ASCII text stays
/// literal; the whole file is rewritten on every run.
pub fn write_snapshot(payload: &FeedPayload, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut writer, formatter);
    payload.serialize(&mut ser)?;
    writer.flush()?;
    Ok(())
}

pub fn read_snapshot(path: &Path) -> Result<FeedPayload> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
