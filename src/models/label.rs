//! Open label enums.
//!
//! Several wire fields are "a known set of labels, but the server may send
//! others". [`open_label!`] generates an enum with one variant per known label
//! plus `Other(String)`, serialized as the bare label string.

macro_rules! open_label {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Label outside the known set, kept verbatim.
            Other(String),
        }

        impl $name {
            /// Wire label.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Other(label) => label,
                }
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                match label.as_str() {
                    $($label => Self::$variant,)+
                    _ => Self::Other(label),
                }
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                Self::from(label.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                match value {
                    $name::Other(label) => label,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
