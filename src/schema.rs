use std::collections::{HashMap, HashSet};

use crate::delimiter::Delimiter;
use crate::error::MergeError;
use crate::source::Source;

/// Ordered column names shared by all merged sources, with a name to position index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Schema {
    /// Create a schema from column names.
    ///
    /// # Examples
    /// ```
    /// use record_merger::schema::Schema;
    /// let schema = Schema::new(vec!["LastName".to_string(), "FirstName".to_string()]);
    /// assert_eq!(schema.position("FirstName"), Some(1));
    /// ```
    pub fn new(columns: Vec<String>) -> Schema {
        let positions = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Schema {
            columns,
            positions,
        }
    }

    /// Resolve the schema from the headers of `sources`.
    ///
    /// The first source sets the column names. Every other source must have the same names in
    /// the same order, otherwise [MergeError::SchemaMismatch] names the first source that
    /// differs. Column names must be unique.
    pub fn resolve(sources: &[(&Source, Delimiter)]) -> Result<Schema, MergeError> {
        let mut columns: Option<Vec<String>> = None;
        for (source, delimiter) in sources {
            let names = delimiter.split_trimmed(source.header());
            match &columns {
                None => {
                    let mut seen = HashSet::new();
                    if let Some(duplicate) = names.iter().find(|name| !seen.insert(name.as_str())) {
                        return Err(
                            MergeError::DuplicateColumn {
                                source_id: source.id().to_string(),
                                column: duplicate.clone(),
                            }
                        );
                    }
                    columns = Some(names)
                }
                Some(expected) => {
                    if *expected != names {
                        return Err(MergeError::SchemaMismatch { source_id: source.id().to_string() });
                    }
                }
            }
        }

        let columns = columns.ok_or(MergeError::NoDelimiter)?;
        log::info!("Resolved columns: {}", columns.join(", "));
        Ok(Schema::new(columns))
    }

    pub fn columns(&self) -> &Vec<String> {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of the column `name`, if present
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use crate::error::MergeError;
    use crate::schema::Schema;
    use crate::source::{bind_delimiters, Source};

    #[test]
    fn test_resolve_across_delimiters() -> Result<(), anyhow::Error> {
        let sources = vec![
            Source::from_text("pipe", "A | B | C"),
            Source::from_text("comma", "A, B, C"),
            Source::from_text("space", "A B C"),
        ];
        let schema = Schema::resolve(&bind_delimiters(&sources)?)?;
        assert_eq!(schema.columns(), &vec!["A", "B", "C"]);
        assert_eq!(schema.position("C"), Some(2));
        assert_eq!(schema.position("D"), None);
        Ok(())
    }

    #[test]
    fn test_resolve_mismatch_names_source() -> Result<(), anyhow::Error> {
        let sources = vec![
            Source::from_text("first", "A,B,C"),
            Source::from_text("second", "A,C,B"),
        ];
        match Schema::resolve(&bind_delimiters(&sources)?) {
            Err(MergeError::SchemaMismatch { source_id }) => assert_eq!(source_id, "second"),
            other => panic!("unexpected: {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_resolve_duplicate_column() -> Result<(), anyhow::Error> {
        let sources = vec![Source::from_text("twice", "A,B,A")];
        match Schema::resolve(&bind_delimiters(&sources)?) {
            Err(MergeError::DuplicateColumn { source_id, column }) => {
                assert_eq!(source_id, "twice");
                assert_eq!(column, "A");
            }
            other => panic!("unexpected: {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_resolve_empty() {
        assert!(matches!(Schema::resolve(&[]), Err(MergeError::NoDelimiter)));
    }
}
