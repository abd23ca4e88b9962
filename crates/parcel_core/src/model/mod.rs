//! Parcel domain model.
//!
//! # Responsibility
//! - Define the canonical parcel record shared by repository and services.
//!
//! # Invariants
//! - Every parcel is identified by a store-assigned `ParcelNumber`.
//! - Status values are free-form text; only `registered` carries policy.

pub mod parcel;
