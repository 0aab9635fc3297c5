// crates/shared-kernel/src/value_objects/direction.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Traversal direction of a range, chosen by comparing its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// `Descending` only when `end < start`; equal bounds count as ascending.
    #[inline]
    pub fn between<I: PartialOrd>(start: &I, end: &I) -> Self {
        if end < start { Self::Descending } else { Self::Ascending }
    }

    #[inline]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("ascending"),
            Self::Descending => f.write_str("descending"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_bounds_are_ascending() {
        assert_eq!(Direction::between(&3, &3), Direction::Ascending);
        assert!(!Direction::between(&3, &3).is_descending());
    }

    #[test]
    fn end_below_start_descends() {
        assert_eq!(Direction::between(&5, &0), Direction::Descending);
        assert!(Direction::between(&-1, &-2).is_descending());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Direction::Descending).unwrap();
        assert_eq!(json, "\"descending\"");
        assert_eq!(Direction::Ascending.to_string(), "ascending");
    }
}
