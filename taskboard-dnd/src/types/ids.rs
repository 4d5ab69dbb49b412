//! Strongly typed identifiers for boards, columns, cards and drag elements

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[derive(Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh ULID-based identifier
            pub fn new() -> Self {
                Self(ulid::Ulid::new().to_string())
            }

            /// Wrap an existing identifier string
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a board
    BoardId
);
define_id!(
    /// Identifier of a column
    ColumnId
);
define_id!(
    /// Identifier of a card
    CardId
);
define_id!(
    /// Identifier of a draggable or droppable element.
    ///
    /// Columns and cards share one id space while a drag is in flight, so
    /// both convert into an `ElementId`.
    ElementId
);

impl From<&ColumnId> for ElementId {
    fn from(id: &ColumnId) -> Self {
        Self(id.0.clone())
    }
}

impl From<ColumnId> for ElementId {
    fn from(id: ColumnId) -> Self {
        Self(id.0)
    }
}

impl From<&CardId> for ElementId {
    fn from(id: &CardId) -> Self {
        Self(id.0.clone())
    }
}

impl From<CardId> for ElementId {
    fn from(id: CardId) -> Self {
        Self(id.0)
    }
}

impl PartialEq<CardId> for ElementId {
    fn eq(&self, other: &CardId) -> bool {
        self.0 == other.0
    }
}

impl PartialEq<ColumnId> for ElementId {
    fn eq(&self, other: &ColumnId) -> bool {
        self.0 == other.0
    }
}
