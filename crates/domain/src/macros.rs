//! Macro for implementing Display and FromStr for fieldless domain enums
//!
//! Keeps the textual names used on the command line and in logs in one place.
//! Parsing is case-insensitive and failures surface as
//! [`SlaDashError::InvalidInput`](crate::SlaDashError::InvalidInput).
//!
//! # Example
//!
//! ```rust
//! use sladash_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shift {
//!     Morning,
//!     Night,
//! }
//!
//! impl_domain_enum_conversions!(Shift {
//!     Morning => "morning",
//!     Night => "night",
//! });
//!
//! assert_eq!("NIGHT".parse::<Shift>().unwrap(), Shift::Night);
//! assert_eq!(Shift::Morning.to_string(), "morning");
//! ```

/// Implements `Display` and `FromStr` for fieldless enums.
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase names
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Stable lowercase name of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::SlaDashError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::SlaDashError::InvalidInput(format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}
