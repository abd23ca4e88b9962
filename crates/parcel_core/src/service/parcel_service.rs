//! Parcel use-case service.
//!
//! # Responsibility
//! - Provide registration with core-owned defaults (status, timestamp).
//! - Delegate every other call to the repository unchanged.
//!
//! # Invariants
//! - Service APIs never bypass the repository's status guard.
//! - No status transition rules are added at this layer.

use crate::model::parcel::{ClientId, Parcel, ParcelNumber};
use crate::repo::parcel_repo::{ParcelRepository, RepoResult};
use chrono::{SecondsFormat, Utc};
use log::info;

/// Use-case service wrapper for parcel operations.
pub struct ParcelService<R: ParcelRepository> {
    repo: R,
}

impl<R: ParcelRepository> ParcelService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new parcel stamped with the current UTC time.
    ///
    /// # Contract
    /// - Status is `registered`.
    /// - `created_at` is RFC3339 with second precision and a `Z` suffix.
    /// - Returns the stored record including its assigned number.
    pub fn register(&self, client: ClientId, address: impl Into<String>) -> RepoResult<Parcel> {
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        self.register_at(client, address, created_at)
    }

    /// Registers a new parcel with a caller-provided creation timestamp.
    pub fn register_at(
        &self,
        client: ClientId,
        address: impl Into<String>,
        created_at: impl Into<String>,
    ) -> RepoResult<Parcel> {
        let mut parcel = Parcel::registered(client, address, created_at);
        parcel.number = self.repo.create_parcel(&parcel)?;
        info!(
            "event=parcel_register module=service status=ok number={} client={}",
            parcel.number, parcel.client
        );
        Ok(parcel)
    }

    /// Gets one parcel by number.
    pub fn get(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        self.repo.get_parcel(number)
    }

    /// Lists all parcels owned by `client`.
    pub fn client_parcels(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        self.repo.list_by_client(client)
    }

    pub fn set_status(&self, number: ParcelNumber, status: &str) -> RepoResult<()> {
        self.repo.set_status(number, status)
    }

    /// Changes the address; silently ignored once the parcel left `registered`.
    pub fn change_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        self.repo.set_address(number, address)
    }

    /// Deletes the parcel; silently ignored once the parcel left `registered`.
    pub fn delete(&self, number: ParcelNumber) -> RepoResult<()> {
        self.repo.delete_parcel(number)
    }
}
