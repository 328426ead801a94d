//! Macro for implementing Display and FromStr for closed domain enums
//!
//! Stages, statuses, roles, brands and views all travel as plain strings at
//! the fixture and CLI boundaries. This macro gives each enum a single
//! canonical string table used for `as_str`, `Display` and `FromStr`.
//!
//! # Example
//!
//! ```rust
//! use novaearn_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum HoldStatus {
//!     Active,
//!     OnHold,
//! }
//!
//! impl_domain_status_conversions!(HoldStatus {
//!     Active => "Active",
//!     OnHold => "On Hold",
//! });
//!
//! assert_eq!(HoldStatus::OnHold.to_string(), "On Hold");
//! assert_eq!("on hold".parse::<HoldStatus>().ok(), Some(HoldStatus::OnHold));
//! ```

/// Implements `as_str`, Display and FromStr for closed domain enums
///
/// This macro generates:
/// - `as_str`: the canonical string for each variant
/// - Display trait: writes the canonical string
/// - FromStr trait: parses case-insensitive, whitespace-trimmed strings
///
/// Parsing failures return [`NovaEarnError::InvalidInput`] naming the enum.
///
/// [`NovaEarnError::InvalidInput`]: crate::NovaEarnError::InvalidInput
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical string form used in fixtures, JSON and the CLI.
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
            type Err = $crate::NovaEarnError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let candidate = s.trim();
                $(
                    if candidate.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err($crate::NovaEarnError::InvalidInput(format!(
                    "Invalid {}: {}",
                    stringify!($enum_name),
                    s
                )))
            }
        }
    };
}
