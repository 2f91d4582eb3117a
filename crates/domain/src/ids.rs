use std::fmt;

use serde::{Deserialize, Serialize};

/// Record ids are designer-assigned strings, so they are free text rather than
/// UUIDs. They may be renamed while a record is being edited.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
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

define_id!(ArtifactId);
define_id!(PossibilityId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = ArtifactId::new("amber-ring");
        assert_eq!(serde_json::to_string(&id).expect("serialize"), "\"amber-ring\"");

        let back: PossibilityId = serde_json::from_str("\"dust\"").expect("deserialize");
        assert_eq!(back, "dust");
    }

    #[test]
    fn whitespace_only_id_is_blank() {
        assert!(ArtifactId::new("  \t").is_blank());
        assert!(!ArtifactId::new(" a ").is_blank());
    }
}
