//! Identifier newtypes for colonists and resources.

use std::borrow::Borrow;
use std::fmt;

/// Returns true if `name` is a non-empty run of ASCII letters and digits.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Generates a string-backed identifier type.
///
/// The generated type borrows as `str` so maps keyed by it can be queried
/// with plain string slices.
///
/// # Usage
/// ```ignore
/// impl_identifier!(
///     /// Case-sensitive name of a colonist.
///     ColonistId
/// );
/// ```
macro_rules! impl_identifier {
    ($(#[$meta:meta])* $type:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $type(String);

        impl $type {
            /// Creates an identifier without validating it.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier is a valid alphanumeric name.
            pub fn is_valid(&self) -> bool {
                is_valid_name(&self.0)
            }
        }

        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $type {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $type {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $type {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl From<String> for $type {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl PartialEq<str> for $type {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $type {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

impl_identifier!(
    /// Case-sensitive name of a colonist.
    ColonistId
);

impl_identifier!(
    /// Case-sensitive name of a resource.
    ResourceId
);
