use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::MergeError;

/// Sort order of a sort key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl Order {
    /// Apply this order to an ascending comparison result.
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Order::Asc => ordering,
            Order::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for Order {
    type Err = MergeError;

    /// Parse a direction token, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let direction = s.to_lowercase();
        match direction.as_str() {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            _ => Err(MergeError::InvalidDirection { direction }),
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Order::Asc => write!(f, "asc"),
            Order::Desc => write!(f, "desc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::str::FromStr;

    use crate::error::MergeError;
    use crate::order::Order;

    #[test]
    fn test_from_str() {
        assert_eq!(Order::from_str("asc").unwrap(), Order::Asc);
        assert_eq!(Order::from_str("DESC").unwrap(), Order::Desc);
        match Order::from_str("greaterthan") {
            Err(MergeError::InvalidDirection { direction }) => assert_eq!(direction, "greaterthan"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(Order::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Order::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Order::Desc.apply(Ordering::Equal), Ordering::Equal);
    }
}
