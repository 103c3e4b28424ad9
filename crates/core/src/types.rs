use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! newtype_string {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new instance from a string value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Return the inner string as a str slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

newtype_string!(CaseId, "Identifier of a SOAR case.");
newtype_string!(AlertId, "Identifier of an alert within a case.");
newtype_string!(
    InstanceId,
    "Opaque identifier of a configured integration instance."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_from_str() {
        let case = CaseId::from("523");
        assert_eq!(case.as_str(), "523");
        assert_eq!(&*case, "523");
    }

    #[test]
    fn newtype_serializes_as_plain_string() {
        let id = InstanceId::new("inst-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"inst-1\"");
        let back: InstanceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn newtype_display() {
        let case = CaseId::new("42");
        assert_eq!(format!("case {case}"), "case 42");
    }
}
