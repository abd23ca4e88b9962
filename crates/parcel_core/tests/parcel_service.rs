use chrono::DateTime;
use parcel_core::db::open_db_in_memory;
use parcel_core::{ParcelService, SqliteParcelRepository, STATUS_DELIVERED, STATUS_REGISTERED};

#[test]
fn register_stamps_status_and_rfc3339_timestamp() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelRepository::try_new(&conn).unwrap());

    let parcel = service.register(10, "Baker st. 221b").unwrap();
    assert!(parcel.number > 0);
    assert_eq!(parcel.status, STATUS_REGISTERED);
    assert!(DateTime::parse_from_rfc3339(&parcel.created_at).is_ok());

    assert_eq!(service.get(parcel.number).unwrap(), parcel);
}

#[test]
fn service_delegates_guarded_mutations() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelRepository::try_new(&conn).unwrap());

    let parcel = service
        .register_at(10, "old", "2024-03-01T10:00:00Z")
        .unwrap();
    service.change_address(parcel.number, "new").unwrap();
    service.set_status(parcel.number, STATUS_DELIVERED).unwrap();
    service.change_address(parcel.number, "ignored").unwrap();
    service.delete(parcel.number).unwrap();

    let stored = service.get(parcel.number).unwrap();
    assert_eq!(stored.address, "new");
    assert_eq!(stored.status, STATUS_DELIVERED);
    assert_eq!(stored.created_at, "2024-03-01T10:00:00Z");
}

#[test]
fn client_parcels_lists_registered_parcels() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelRepository::try_new(&conn).unwrap());

    let first = service.register(3, "a").unwrap();
    let second = service.register(3, "b").unwrap();
    service.register(4, "c").unwrap();

    let mut numbers: Vec<_> = service
        .client_parcels(3)
        .unwrap()
        .into_iter()
        .map(|parcel| parcel.number)
        .collect();
    numbers.sort_unstable();
    assert_eq!(numbers, vec![first.number, second.number]);
}
