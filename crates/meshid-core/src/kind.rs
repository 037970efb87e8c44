//! Identifier kinds and their binary prefixes.
//!
//! The kind set is closed: adding a kind is a compile-time-checked change,
//! since every dispatch below matches exhaustively. Prefixes are fixed
//! binary constants and must match byte-for-byte across implementations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

/// Length of a kind prefix in bytes.
pub const PREFIX_LEN: usize = 3;

/// The closed set of identifier kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdKind {
    /// An agent address wrapping a 32-byte public key.
    Agent,
    /// A content entry digest.
    Entry,
    /// A chain header digest.
    Header,
    /// A DNA definition digest.
    Dna,
}

impl IdKind {
    /// Every kind, in declaration order.
    pub const ALL: [IdKind; 4] = [IdKind::Agent, IdKind::Entry, IdKind::Header, IdKind::Dna];

    /// The fixed 3-byte binary prefix for this kind.
    pub const fn prefix(self) -> [u8; PREFIX_LEN] {
        match self {
            IdKind::Agent => [0x84, 0x20, 0x24],
            IdKind::Entry => [0x84, 0x21, 0x24],
            IdKind::Header => [0x84, 0x29, 0x24],
            IdKind::Dna => [0x84, 0x2d, 0x24],
        }
    }

    /// Look up the kind carrying the given binary prefix.
    pub fn from_prefix(prefix: &[u8]) -> Option<Self> {
        IdKind::ALL.into_iter().find(|kind| kind.prefix() == prefix)
    }

    /// The kind name as used in textual dispatch.
    pub const fn name(self) -> &'static str {
        match self {
            IdKind::Agent => "agent",
            IdKind::Entry => "entry",
            IdKind::Header => "header",
            IdKind::Dna => "dna",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IdKind {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "agent" => Ok(IdKind::Agent),
            "entry" => Ok(IdKind::Entry),
            "header" => Ok(IdKind::Header),
            "dna" => Ok(IdKind::Dna),
            other => Err(CodecError::UnsupportedKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_constants() {
        assert_eq!(IdKind::Agent.prefix(), [0x84, 0x20, 0x24]);
        assert_eq!(IdKind::Entry.prefix(), [0x84, 0x21, 0x24]);
        assert_eq!(IdKind::Header.prefix(), [0x84, 0x29, 0x24]);
        assert_eq!(IdKind::Dna.prefix(), [0x84, 0x2d, 0x24]);
    }

    #[test]
    fn test_prefix_mapping_injective() {
        for a in IdKind::ALL {
            for b in IdKind::ALL {
                if a != b {
                    assert_ne!(a.prefix(), b.prefix());
                }
            }
        }
    }

    #[test]
    fn test_from_prefix_roundtrip() {
        for kind in IdKind::ALL {
            assert_eq!(IdKind::from_prefix(&kind.prefix()), Some(kind));
        }
    }

    #[test]
    fn test_from_prefix_unknown() {
        assert_eq!(IdKind::from_prefix(&[0x84, 0x22, 0x24]), None);
        assert_eq!(IdKind::from_prefix(&[]), None);
    }

    #[test]
    fn test_from_str_roundtrip() {
        for kind in IdKind::ALL {
            assert_eq!(kind.name().parse::<IdKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_from_str_unsupported() {
        let err = "link".parse::<IdKind>().unwrap_err();
        assert!(matches!(err, CodecError::UnsupportedKind(s) if s == "link"));
    }
}
