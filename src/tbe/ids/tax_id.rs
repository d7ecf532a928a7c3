use std::fmt;

/// Tax identification number, the unique lookup key for a client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaxId(pub String);

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
