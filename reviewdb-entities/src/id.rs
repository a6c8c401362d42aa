use std::{fmt, num::ParseIntError, str::FromStr};

// All identifiers are plain integers assigned either by
// the storage (reviews) or by external systems (subjects,
// accounts).
macro_rules! integer_id {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            pub const fn to_inner(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(from: i64) -> Self {
                Self(from)
            }
        }

        impl From<$name> for i64 {
            fn from(from: $name) -> Self {
                from.0
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

integer_id! {
    /// Identifier of a stored review, unique within its kind.
    ReviewId
}

integer_id! {
    /// Identifier of the reviewed product, service or team.
    SubjectId
}

integer_id! {
    /// Identifier of the account that authored a review.
    AccountId
}
