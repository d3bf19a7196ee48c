use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::delimiter::Delimiter;
use crate::error::MergeError;

/// One unit of delimited text contributing rows to a merge: a file or an in memory text.
///
/// The first line is the header. The delimiter is detected from the header when the source is
/// created and never changes.
#[derive(Clone, Debug)]
pub struct Source {
    id: String,
    lines: Vec<String>,
    delimiter: Option<Delimiter>,
}

impl Source {
    /// Read a source from a file. A missing file fails with [MergeError::SourceNotFound].
    pub fn open(path: &Path) -> Result<Source, MergeError> {
        if !path.exists() {
            return Err(MergeError::SourceNotFound { path: path.to_path_buf() });
        }
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => MergeError::SourceNotFound { path: path.to_path_buf() },
            _ => MergeError::Io { path: path.to_path_buf(), source: e },
        })?;
        let source = Source::from_text(path.display().to_string(), &text);
        log::info!(
            "Read source {}, lines: {}, delimiter: {}",
            source.id(),
            source.lines.len(),
            source.delimiter.map_or("none".to_string(), |d| d.to_string()),
        );
        Ok(source)
    }

    /// Create a source from text. Both LF and CRLF line endings are accepted, a leading byte
    /// order mark is dropped.
    pub fn from_text(id: impl Into<String>, text: &str) -> Source {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let lines: Vec<String> = text.lines().map(|line| line.to_string()).collect();
        let delimiter = lines.first().and_then(|header| Delimiter::detect(header));
        Source {
            id: id.into(),
            lines,
            delimiter,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The first line, empty for an empty source.
    pub fn header(&self) -> &str {
        self.lines.first().map_or("", |header| header.as_str())
    }

    /// Delimiter detected from the header
    pub fn delimiter(&self) -> Option<Delimiter> {
        self.delimiter
    }

    /// Lines after the header paired with their 1-based line number in the source.
    pub fn data_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, line)| (i + 1, line.as_str()))
    }
}

/// Pair every source with its delimiter, in source order.
///
/// Sources without a delimiter are left out. Fails with [MergeError::NoDelimiter] when no
/// source is left, including when `sources` is empty.
pub fn bind_delimiters(sources: &[Source]) -> Result<Vec<(&Source, Delimiter)>, MergeError> {
    let mut bound = Vec::with_capacity(sources.len());
    for source in sources {
        match source.delimiter() {
            Some(delimiter) => bound.push((source, delimiter)),
            None => log::warn!("Skipping {}, header does not contain a valid delimiter", source.id()),
        }
    }

    if bound.is_empty() {
        Err(MergeError::NoDelimiter)
    } else {
        Ok(bound)
    }
}
