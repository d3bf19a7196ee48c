use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::MergeError;
use crate::order::Order;
use crate::schema::Schema;

/// Maximum number of sort keys in a sort specification
pub const MAX_SORT_KEYS: usize = 2;

/// A resolved sort key: the column to compare and the direction.
///
/// # Examples
/// ```
/// use record_merger::order::Order;
/// use record_merger::sort_key::SortKey;
/// // sort by the fourth column, newest first
/// let key = SortKey::new(3, Order::Desc).with_str_name("DateOfBirth");
/// assert_eq!(key.position(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortKey {
    name: String,
    position: usize,
    order: Order,
}

impl SortKey {
    /// Create a new [SortKey]
    ///
    /// # Arguments
    /// * `position` - the position of the column in the schema, starting at 0
    /// * `order` - the direction, see [Order]
    pub fn new(position: usize, order: Order) -> SortKey {
        SortKey {
            name: String::new(),
            position,
            order,
        }
    }

    /// Resolve a `column[:asc|desc]` directive against `schema`.
    ///
    /// The direction defaults to ascending and is case insensitive.
    pub fn parse(directive: &str, schema: &Schema) -> Result<SortKey, MergeError> {
        let (name, direction) = match directive.split_once(':') {
            Some((name, direction)) => (name, Some(direction)),
            None => (directive, None),
        };

        let position = schema
            .position(name)
            .ok_or_else(|| MergeError::UnknownColumn { column: name.to_string() })?;

        let order = match direction {
            Some(direction) => Order::from_str(direction)?,
            None => Order::Asc,
        };

        Ok(SortKey::new(position, order).with_str_name(name))
    }

    /// Get the column name of this key, empty when the key was built from a position.
    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Specify a name for this key
    pub fn with_name(mut self, name: String) -> SortKey {
        self.name = name;
        self
    }

    /// Specify a name for this key as &str
    pub fn with_str_name(mut self, name: &str) -> SortKey {
        self.name = name.to_string();
        self
    }

    pub fn with_order(mut self, order: Order) -> SortKey {
        self.order = order;
        self
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.name.is_empty() {
            write!(f, "#{}:{}", self.position, self.order)
        } else {
            write!(f, "{}:{}", self.name, self.order)
        }
    }
}

/// Resolve a sort specification of at most [MAX_SORT_KEYS] directives, first one primary.
///
/// The directive count is checked before any directive is resolved.
pub fn parse_sort_keys<S: AsRef<str>>(directives: &[S], schema: &Schema) -> Result<Vec<SortKey>, MergeError> {
    if directives.len() > MAX_SORT_KEYS {
        return Err(MergeError::TooManySortKeys { count: directives.len() });
    }

    directives
        .iter()
        .map(|directive| SortKey::parse(directive.as_ref(), schema))
        .collect()
}
