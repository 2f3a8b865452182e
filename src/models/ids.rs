//! Newtype wrappers for the integer IDs used by the backend.
//!
//! These help disambiguate, say, a contractor ID from a transaction ID, leading to better compile
//! time errors. On the wire every ID is a plain integer.

use std::{fmt::Display, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Cast the ID to a 64 bit integer.
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

id_type!(
    /// The ID of a user account on the backend.
    UserId
);
id_type!(
    /// The ID of a transaction.
    TransactionId
);
id_type!(
    /// The ID of a contractor, i.e. a payer or payee.
    ContractorId
);
id_type!(
    /// The ID of a transaction status.
    StatusId
);
id_type!(
    /// The ID of a transaction type.
    TransactionTypeId
);
