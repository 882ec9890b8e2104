//! Identity atoms.
//!
//! ActorId: canonical principal text of a backend identity
//! ReferralId / IntakeId / BedId / FacilityId: numeric record ids

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{InvalidId, ModelError};

/// Actor identifier - the canonical text form of a backend principal.
///
/// Opaque to this layer; compared by exact string equality. Non-empty.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    pub fn new(s: impl Into<String>) -> Result<Self, ModelError> {
        let s = s.into();
        if s.is_empty() {
            Err(InvalidId::Actor {
                raw: s,
                reason: "empty".into(),
            }
            .into())
        } else {
            Ok(Self(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `n` characters of the canonical text, for abbreviated display.
    pub fn prefix(&self, n: usize) -> String {
        self.0.chars().take(n).collect()
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({:?})", self.0)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            pub fn value(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Referral record id. Backend-assigned; zero is a valid id.
    ReferralId
);
record_id!(
    /// Intake record id.
    IntakeId
);
record_id!(
    /// Bed record id. Zero is a valid id - presence checks must use
    /// `Option`, never the numeric value.
    BedId
);
record_id!(
    /// Facility record id.
    FacilityId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_id_rejects_empty() {
        assert!(ActorId::new("").is_err());
        assert!(ActorId::new("w7x2b-principal").is_ok());
    }

    #[test]
    fn actor_id_prefix_is_char_safe() {
        let id = ActorId::new("abcdefghij").unwrap();
        assert_eq!(id.prefix(8), "abcdefgh");
        let short = ActorId::new("ab").unwrap();
        assert_eq!(short.prefix(8), "ab");
    }
}
