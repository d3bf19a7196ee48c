use std::fmt::{Display, Formatter};

/// Field delimiter of a source.
///
/// Detection checks the candidates in the order they are declared here: a line containing both
/// a pipe and a space is pipe delimited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    /// '|'
    Pipe,
    /// ','
    Comma,
    /// ' '
    Space,
}

impl Delimiter {
    const CANDIDATES: [Delimiter; 3] = [Delimiter::Pipe, Delimiter::Comma, Delimiter::Space];

    /// Detect the delimiter used by `line`, returning the first candidate contained in it.
    /// A blank line has no delimiter.
    ///
    /// # Examples
    /// ```
    /// use record_merger::delimiter::Delimiter;
    /// assert_eq!(Delimiter::detect("LastName | FirstName"), Some(Delimiter::Pipe));
    /// assert_eq!(Delimiter::detect("LastName, FirstName"), Some(Delimiter::Comma));
    /// assert_eq!(Delimiter::detect("LastNameFirstName"), None);
    /// ```
    pub fn detect(line: &str) -> Option<Delimiter> {
        if line.trim().is_empty() {
            return None;
        }
        Self::CANDIDATES
            .into_iter()
            .find(|delimiter| line.contains(delimiter.as_char()))
    }

    /// Map a character back to a [Delimiter]
    pub fn from_char(c: char) -> Option<Delimiter> {
        Self::CANDIDATES
            .into_iter()
            .find(|delimiter| delimiter.as_char() == c)
    }

    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Pipe => '|',
            Delimiter::Comma => ',',
            Delimiter::Space => ' ',
        }
    }

    /// Split `line` by this delimiter and trim every field.
    pub fn split_trimmed(&self, line: &str) -> Vec<String> {
        line.split(self.as_char())
            .map(|field| field.trim().to_string())
            .collect()
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use crate::delimiter::Delimiter;

    #[test]
    fn test_priority_order() {
        assert_eq!(Delimiter::detect("a | b, c d"), Some(Delimiter::Pipe));
        assert_eq!(Delimiter::detect("a, b c"), Some(Delimiter::Comma));
        assert_eq!(Delimiter::detect("a b"), Some(Delimiter::Space));
    }

    #[test]
    fn test_no_delimiter() {
        assert_eq!(Delimiter::detect(""), None);
        assert_eq!(Delimiter::detect("LastNameFirstNameEmail"), None);
        assert_eq!(Delimiter::detect("\t"), None);
    }

    #[test]
    fn test_blank_line() {
        assert_eq!(Delimiter::detect("   "), None);
        assert_eq!(Delimiter::detect(" | "), Some(Delimiter::Pipe));
    }

    #[test]
    fn test_split_trimmed() {
        let fields = Delimiter::Pipe.split_trimmed("Smith | John |  Blue ");
        assert_eq!(fields, vec!["Smith", "John", "Blue"]);
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Delimiter::from_char(','), Some(Delimiter::Comma));
        assert_eq!(Delimiter::from_char(';'), None);
    }
}
