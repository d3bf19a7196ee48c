use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use regex::Regex;
use tempfile::{Builder, NamedTempFile};

use crate::config::Config;
use crate::csv::{format_body, format_csv};
use crate::error::MergeError;
use crate::row::{extract_rows, Row};
use crate::schema::Schema;
use crate::sort::sort_rows;
use crate::sort_key::parse_sort_keys;
use crate::source::{bind_delimiters, Source};

pub(crate) fn create_tmp_file(config: &Config, dir: &Path) -> Result<NamedTempFile, anyhow::Error> {
    Builder::new()
        .prefix(config.tmp_prefix())
        .suffix(config.tmp_suffix())
        .tempfile_in(dir)
        .with_context(|| anyhow!("Failed to create new temp file in {}", dir.display()))
}

/// Column names and sorted rows of a completed merge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedCsv {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl MergedCsv {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> MergedCsv {
        MergedCsv {
            columns,
            rows,
        }
    }

    pub fn columns(&self) -> &Vec<String> {
        &self.columns
    }

    pub fn rows(&self) -> &Vec<Row> {
        &self.rows
    }

    /// The CSV document: header, `endl`, body.
    pub fn to_csv(&self, endl: &str) -> String {
        format_csv(&self.columns, &self.rows, endl)
    }

    /// The CSV rows without the header.
    pub fn body(&self, endl: &str) -> String {
        format_body(&self.rows, endl)
    }
}

/// Merge `sources` into one sorted row set.
///
/// Sources without a delimiter in their header are skipped. The sort directives are resolved
/// before any row is read so that an invalid directive fails the merge without touching the
/// data lines.
pub fn merge_sources<S: AsRef<str>>(
    sources: &[Source],
    directives: &[S],
    ignore_lines: Option<&Regex>,
) -> Result<MergedCsv, MergeError> {
    let bound = bind_delimiters(sources)?;
    let schema = Schema::resolve(&bound)?;
    let sort_keys = parse_sort_keys(directives, &schema)?;
    log::info!(
        "Sort specification: [{}]",
        sort_keys.iter().map(|key| key.to_string()).collect::<Vec<String>>().join(", ")
    );

    let mut rows = Vec::new();
    for (source, delimiter) in bound {
        rows.append(&mut extract_rows(source, delimiter, &schema, ignore_lines)?);
    }
    log::info!("Merged {} rows from {} sources", rows.len(), sources.len());

    let rows = sort_rows(rows, &sort_keys);
    Ok(MergedCsv::new(schema.columns().clone(), rows))
}

/// Merge text files with a shared header into a single CSV
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use record_merger::merge::Merge;
///
/// fn merge_records(inputs: Vec<PathBuf>, output: PathBuf) -> Result<(), anyhow::Error> {
///     let mut merge = Merge::new(inputs);
///     // at most two sort directives, the first one is primary
///     merge.add_sort("FavoriteColor:asc".to_string());
///     merge.add_sort("LastName".to_string());
///     // without an output the CSV is written to STDOUT
///     merge.with_output(output);
///     merge.merge()
/// }
/// ```
pub struct Merge {
    input_files: Vec<PathBuf>,
    output: Option<PathBuf>,
    config: Config,
}

impl Merge {
    /// Create a default Merge definition.
    ///
    /// * no sort directives, rows keep the input order
    /// * no output path, the CSV is written to STDOUT
    /// * only blank lines are ignored
    /// * line separator is the platform line separator
    pub fn new(input_files: Vec<PathBuf>) -> Merge {
        Merge {
            input_files,
            output: None,
            config: Config::new(".record-merger-".to_string(), ".csv".to_string()),
        }
    }

    /// Write the CSV to `output` instead of STDOUT. The file is replaced atomically.
    pub fn with_output(&mut self, output: PathBuf) {
        self.output = Some(output);
    }

    /// Add a `column[:asc|desc]` sort directive
    pub fn add_sort(&mut self, directive: String) {
        self.config.sort_mut().push(directive);
    }

    /// Replace all sort directives with `directives`
    pub fn with_sort(&mut self, directives: Vec<String>) {
        *self.config.sort_mut() = directives;
    }

    /// Specify which data lines to ignore. Each line matching the regex will not appear in the
    /// output.
    pub fn with_ignore_lines(&mut self, r: Regex) {
        self.config.set_ignore_lines(r)
    }

    /// Set the line separator of the output
    pub fn with_endl(&mut self, endl: &str) {
        self.config.set_endl(endl)
    }

    /// Read and merge the input files.
    pub fn run(&self) -> Result<MergedCsv, MergeError> {
        let sources = self.input_files
            .iter()
            .map(|path| Source::open(path))
            .collect::<Result<Vec<Source>, MergeError>>()?;
        merge_sources(&sources, self.config.sort().as_slice(), self.config.ignore_lines().as_ref())
    }

    /// Read and merge the input files and format the result as a CSV document.
    pub fn to_csv(&self) -> Result<String, MergeError> {
        Ok(self.run()?.to_csv(self.config.endl()))
    }

    /// Merge the input files and write the CSV to the output file or to STDOUT
    pub fn merge(&self) -> Result<(), anyhow::Error> {
        let csv = self.to_csv()?;
        match &self.output {
            None => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(csv.as_bytes())?;
                handle.write_all(self.config.endl().as_bytes())?;
                handle.flush()?;
            }
            Some(output) => {
                Self::write_output(&csv, output, &self.config)?;
                log::info!("Wrote {}", output.display());
            }
        }
        Ok(())
    }

    fn write_output(csv: &str, output: &Path, config: &Config) -> Result<(), anyhow::Error> {
        let dir = match output.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| anyhow!("Failed to create directory {}", dir.display()))?;
        }

        let mut tmp_file = create_tmp_file(config, &dir)?;
        tmp_file.write_all(csv.as_bytes())
            .with_context(|| anyhow!("path: {}", tmp_file.path().display()))?;
        tmp_file.persist(output)
            .with_context(|| anyhow!("Persist {}", output.display()))?;
        Ok(())
    }
}
