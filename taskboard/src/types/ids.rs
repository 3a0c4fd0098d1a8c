//! Identifier newtypes
//!
//! Boards and columns use numeric ids; everything else uses prefixed string ids
//! (`task-01J...`, `comment-01J...`).

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh `<prefix>-<ulid>` id
            pub fn new() -> Self {
                Self(format!(concat!($prefix, "-{}"), ulid::Ulid::new().to_string().to_lowercase()))
            }

            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
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

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

numeric_id!(
    /// Board identifier
    BoardId
);
numeric_id!(
    /// Column identifier, unique within a board
    ColumnId
);

string_id!(TaskId, "task");
string_id!(CommentId, "comment");
string_id!(ChecklistId, "checklist");
string_id!(ChecklistItemId, "item");
string_id!(UserId, "user");
string_id!(LabelId, "label");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_prefixed_and_unique() {
        let a = TaskId::new();
        let b = TaskId::new();
        assert!(a.as_str().starts_with("task-"));
        assert_ne!(a, b);
        assert!(CommentId::new().as_str().starts_with("comment-"));
    }

    #[test]
    fn test_string_id_serializes_transparently() {
        let id = TaskId::from_string("task-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"task-1\"");
        assert_eq!(id, "task-1");
    }

    #[test]
    fn test_numeric_id() {
        let id: BoardId = serde_json::from_str("7").unwrap();
        assert_eq!(id.get(), 7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(ColumnId::from(3), ColumnId::new(3));
    }
}
