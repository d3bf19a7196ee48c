use regex::Regex;

use crate::csv::PLATFORM_ENDL;

/// Settings of one merge, owned by the [crate::merge::Merge] builder.
#[derive(Clone, Debug)]
pub(crate) struct Config {
    tmp_prefix: String,
    tmp_suffix: String,
    sort: Vec<String>,
    ignore_lines: Option<Regex>,
    endl: String,
}

impl Config {
    pub(crate) fn new(tmp_prefix: String, tmp_suffix: String) -> Config {
        Config {
            tmp_prefix,
            tmp_suffix,
            sort: vec![],
            ignore_lines: None,
            endl: PLATFORM_ENDL.to_string(),
        }
    }

    pub(crate) fn tmp_prefix(&self) -> &String {
        &self.tmp_prefix
    }

    pub(crate) fn tmp_suffix(&self) -> &String {
        &self.tmp_suffix
    }

    pub(crate) fn sort(&self) -> &Vec<String> {
        &self.sort
    }

    pub(crate) fn sort_mut(&mut self) -> &mut Vec<String> {
        &mut self.sort
    }

    pub(crate) fn ignore_lines(&self) -> &Option<Regex> {
        &self.ignore_lines
    }

    pub(crate) fn set_ignore_lines(&mut self, r: Regex) {
        self.ignore_lines = Some(r)
    }

    pub(crate) fn endl(&self) -> &String {
        &self.endl
    }

    pub(crate) fn set_endl(&mut self, endl: &str) {
        self.endl = endl.to_string()
    }
}
