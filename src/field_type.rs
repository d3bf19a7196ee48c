/// Type of a cell value as seen by the sort
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// Calendar date, compared chronologically
    Date,
    /// Plain text, compared ordinally
    Text,
}
