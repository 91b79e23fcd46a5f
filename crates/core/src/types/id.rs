//! Newtype IDs for type-safe entity references.
//!
//! Entity IDs are human-readable prefixed strings (`cliente-3`,
//! `equipamento-1`, `OS-2026-0007`, `log-<uuid>`). The text shapes are part
//! of the persisted wire format and must not change. Use the
//! `define_prefixed_id!` macro to create type-safe wrappers for the
//! `<prefix>-<sequence>` family.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe ID wrapper for `<prefix>-<n>` identifiers.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `from_seq()` to build the next ID from a sequence counter
/// - `seq()` to recover the numeric suffix (for counter reconciliation)
/// - `Display`, `AsRef<str>` and `From<String>`/`From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use ordem_core::define_prefixed_id;
/// define_prefixed_id!(TicketId, "ticket");
///
/// let id = TicketId::from_seq(3);
/// assert_eq!(id.as_str(), "ticket-3");
/// assert_eq!(id.seq(), Some(3));
/// ```
#[macro_export]
macro_rules! define_prefixed_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// The fixed prefix of this ID family.
            pub const PREFIX: &'static str = $prefix;

            /// Build the ID for a given sequence number.
            #[must_use]
            pub fn from_seq(seq: u64) -> Self {
                Self(format!(concat!($prefix, "-{}"), seq))
            }

            /// Wrap an existing raw ID string.
            #[must_use]
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Get the underlying string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Recover the numeric suffix, if this ID follows the
            /// `<prefix>-<n>` shape. IDs from foreign imports may not.
            #[must_use]
            pub fn seq(&self) -> Option<u64> {
                self.0
                    .strip_prefix(concat!($prefix, "-"))
                    .and_then(|s| s.parse().ok())
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }
    };
}

// Define standard entity IDs
define_prefixed_id!(ClientId, "cliente");
define_prefixed_id!(EquipmentId, "equipamento");
define_prefixed_id!(AttachmentId, "anexo");

/// Service order ID: `OS-<year>-<4-digit sequence>`.
///
/// The year is the creation year; uniqueness comes from the sequence, which
/// is monotonic across years.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Build the ID for a creation year and sequence number.
    #[must_use]
    pub fn from_parts(year: i32, seq: u64) -> Self {
        Self(format!("OS-{year}-{seq:04}"))
    }

    /// Wrap an existing raw ID string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recover the sequence number, if this ID follows the
    /// `OS-<year>-<seq>` shape.
    #[must_use]
    pub fn seq(&self) -> Option<u64> {
        let rest = self.0.strip_prefix("OS-")?;
        let (_year, seq) = rest.split_once('-')?;
        seq.parse().ok()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for OrderId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for OrderId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

/// Audit log entry ID: `log-<uuid>`.
///
/// Random rather than sequential - audit entries are append-only and never
/// referenced by user-facing screens, so collision resistance matters more
/// than readability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditLogId(String);

impl AuditLogId {
    /// Generate a fresh random ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("log-{}", uuid::Uuid::new_v4()))
    }

    /// Wrap an existing raw ID string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuditLogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AuditLogId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Company ID. The company record is a singleton with a fixed ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(String);

impl CompanyId {
    /// The fixed singleton ID.
    pub const FIXED: &'static str = "empresa-1";

    /// Wrap an existing raw ID string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CompanyId {
    fn default() -> Self {
        Self(Self::FIXED.to_string())
    }
}

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
