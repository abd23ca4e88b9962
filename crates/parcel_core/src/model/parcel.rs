//! Parcel domain record.
//!
//! # Responsibility
//! - Define the shipment record persisted in the `parcel` table.
//! - Name the status literals used across core and its callers.
//!
//! # Invariants
//! - `number` is assigned by the store and never reused.
//! - `created_at` is written once at creation and never mutated.
//! - `address` changes and deletion are allowed only while the status is
//!   `STATUS_REGISTERED`; the repository enforces this, not the model.

use serde::{Deserialize, Serialize};

/// Store-assigned primary key of a parcel.
pub type ParcelNumber = i64;

/// Identifier of the client owning a parcel.
pub type ClientId = i64;

/// Initial lifecycle state. Gates address changes and deletion.
pub const STATUS_REGISTERED: &str = "registered";
/// Parcel handed over to a carrier.
pub const STATUS_SENT: &str = "sent";
/// Parcel handed over to the recipient.
pub const STATUS_DELIVERED: &str = "delivered";

/// Tracked shipment record.
///
/// `status` is deliberately a plain string: callers may store any value and
/// core does not validate transitions between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    /// Primary key. Ignored on create; `0` until the store assigns one.
    pub number: ParcelNumber,
    pub client: ClientId,
    pub status: String,
    /// Destination address.
    pub address: String,
    /// RFC3339 creation timestamp supplied by the caller.
    pub created_at: String,
}

impl Parcel {
    /// Creates an unsaved parcel with the given fields.
    pub fn new(
        client: ClientId,
        status: impl Into<String>,
        address: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            number: 0,
            client,
            status: status.into(),
            address: address.into(),
            created_at: created_at.into(),
        }
    }

    /// Creates an unsaved parcel in the registered state.
    pub fn registered(
        client: ClientId,
        address: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self::new(client, STATUS_REGISTERED, address, created_at)
    }

    /// Returns whether address changes and deletion are still allowed.
    pub fn is_registered(&self) -> bool {
        self.status == STATUS_REGISTERED
    }
}

#[cfg(test)]
mod tests {
    use super::{Parcel, STATUS_DELIVERED, STATUS_REGISTERED};

    #[test]
    fn registered_constructor_sets_initial_status() {
        let parcel = Parcel::registered(7, "Main st. 1", "2024-01-01T00:00:00Z");
        assert_eq!(parcel.number, 0);
        assert_eq!(parcel.status, STATUS_REGISTERED);
        assert!(parcel.is_registered());
    }

    #[test]
    fn other_statuses_close_the_gate() {
        let parcel = Parcel::new(7, STATUS_DELIVERED, "Main st. 1", "2024-01-01T00:00:00Z");
        assert!(!parcel.is_registered());
    }
}
