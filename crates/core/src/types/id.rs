//! Newtype IDs for type-safe entity references.
//!
//! The backend hands out opaque identifiers. They are kept as strings and
//! never interpreted, so the `define_id!` macro wraps a `String` and accepts
//! either a JSON string or a JSON integer on the way in.

/// Macro to define a type-safe, opaque ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize` as a plain JSON string
/// - `Deserialize` from a JSON string or integer
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use seya_core::define_id;
/// define_id!(ProductId);
/// define_id!(BlogPostId);
///
/// let product_id = ProductId::new("66a1f0");
/// let post_id = BlogPostId::new("66a1f0");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = post_id;
/// assert_eq!(product_id.as_str(), post_id.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying identifier.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                #[derive(::serde::Deserialize)]
                #[serde(untagged)]
                enum Raw {
                    Text(String),
                    Signed(i64),
                    Unsigned(u64),
                }

                Ok(match Raw::deserialize(deserializer)? {
                    Raw::Text(id) => Self(id),
                    Raw::Signed(id) => Self(id.to_string()),
                    Raw::Unsigned(id) => Self(id.to_string()),
                })
            }
        }
    };
}

define_id!(ProductId);
define_id!(BlogPostId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_string_id() {
        let id: ProductId = serde_json::from_str("\"66a1f0c2\"").unwrap();
        assert_eq!(id.as_str(), "66a1f0c2");
    }

    #[test]
    fn test_deserialize_integer_id() {
        let id: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ProductId::new("42"));
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&BlogPostId::new("7")).unwrap();
        assert_eq!(json, "\"7\"");
    }

    #[test]
    fn test_rejects_non_scalar() {
        assert!(serde_json::from_str::<ProductId>("{\"id\":1}").is_err());
    }
}
