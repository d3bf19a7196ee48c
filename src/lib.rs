//! This crate merges text files composed of delimited line records sharing a common header into
//! a single CSV document, optionally sorted by up to two columns.
//!
//! Every input file starts with a header line naming the columns. The field delimiter of each
//! file is detected from its header: a pipe (`|`), a comma (`,`) or a space (` `), checked in
//! that order, so files using different delimiters can be merged as long as their column names
//! agree. Fields are trimmed, and values recognized as calendar dates are rewritten to
//! `M/d/yyyy` and compared chronologically when sorting. Other values compare as text.
//!
//! The same row handling backs a small HTTP record store, see [api].
//!
//! # Examples
//! ```
//! use std::path::PathBuf;
//! use record_merger::merge::Merge;
//!
//! // merge and sort by favorite color, then by last name descending
//! fn merge_records(inputs: Vec<PathBuf>, output: PathBuf) -> Result<(), anyhow::Error> {
//!     let mut merge = Merge::new(inputs);
//!     merge.add_sort("FavoriteColor".to_string());
//!     merge.add_sort("LastName:desc".to_string());
//!
//!     // the output file is written through a temporary file in the same directory. Without an
//!     // output the CSV is written to STDOUT.
//!     merge.with_output(output);
//!     merge.merge()
//! }
//! ```
//!

pub(crate) mod config;
pub(crate) mod key;
pub(crate) mod line_record;

pub mod api;
pub mod csv;
pub mod date;
pub mod delimiter;
pub mod error;
pub mod field_type;
pub mod merge;
pub mod order;
pub mod row;
pub mod schema;
pub mod sort;
pub mod sort_key;
pub mod source;
pub mod store;
