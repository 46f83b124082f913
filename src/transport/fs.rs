use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::CorpusError;

/// Open `path` for buffered reading, attributing failures to `source_id`.
pub fn open_reader(source_id: &str, path: &Path) -> Result<BufReader<File>, CorpusError> {
    let file = File::open(path).map_err(|err| CorpusError::SourceUnavailable {
        source_id: source_id.to_string(),
        reason: format!("failed opening {}: {err}", path.display()),
    })?;
    Ok(BufReader::new(file))
}

/// Write `items` as JSON lines, truncating any existing file.
///
/// Parent directories are created as needed. Returns the number of lines
/// written.
pub fn write_jsonl<'a, T, I>(path: &Path, items: I) -> Result<usize, CorpusError>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    let mut written = 0usize;
    for item in items {
        serde_json::to_writer(&mut writer, item)?;
        writer.write_all(b"\n")?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Read JSON lines from `path`, skipping blank lines.
///
/// Every returned item is paired with its 1-based line number.
pub fn read_jsonl<T: DeserializeOwned>(path: &Path) -> Result<Vec<(usize, T)>, CorpusError> {
    let reader = open_reader(&path.display().to_string(), path)?;
    let mut items = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let item = serde_json::from_str(&line).map_err(|err| CorpusError::InvariantViolation {
            line: idx + 1,
            details: format!("unparseable node: {err}"),
        })?;
        items.push((idx + 1, item));
    }
    Ok(items)
}
