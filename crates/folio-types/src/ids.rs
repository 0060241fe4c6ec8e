//! Block and document identifiers.
//!
//! Every block gets a fresh UUIDv7 when it is created. Removing a block
//! retires its id; nothing hands it out again. Identity survives reorders
//! and content edits, which is what lets a drop gesture name the block it
//! moved.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Names one block for the lifetime of its document.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(uuid::Uuid);

/// Names a saved document.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(uuid::Uuid);

macro_rules! typed_id {
    ($T:ident, $tag:literal) => {
        impl $T {
            pub fn new() -> Self {
                Self(uuid::Uuid::now_v7())
            }

            /// Leading 8 hex digits. Log and UI text only.
            pub fn short(&self) -> String {
                let mut hex = self.0.as_simple().to_string();
                hex.truncate(8);
                hex
            }

            /// Accepts hyphenated or bare hex.
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                uuid::Uuid::parse_str(s.trim()).map(Self)
            }
        }

        impl Default for $T {
            fn default() -> Self {
                Self::new()
            }
        }

        impl FromStr for $T {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl fmt::Display for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl fmt::Debug for $T {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}:{}", $tag, self.short())
            }
        }
    };
}

typed_id!(BlockId, "block");
typed_id!(DocumentId, "doc");

// ============================================================================
// Tests
// ============================================================================
