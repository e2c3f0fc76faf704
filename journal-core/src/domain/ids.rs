use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade ID, unique within a store and stable for the trade's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TradeId(pub u64);

impl TradeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The ID following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for TradeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TradeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_increments() {
        assert_eq!(TradeId::new(7).next(), TradeId(8));
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&TradeId(3)).unwrap();
        assert_eq!(json, "3");
        let back: TradeId = serde_json::from_str("3").unwrap();
        assert_eq!(back, TradeId(3));
    }
}
