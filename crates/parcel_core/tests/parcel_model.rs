use parcel_core::{Parcel, STATUS_REGISTERED};
use serde_json::json;

#[test]
fn serializes_with_snake_case_fields() {
    let mut parcel = Parcel::registered(12, "Main st. 1", "2024-03-01T10:00:00Z");
    parcel.number = 3;

    let value = serde_json::to_value(&parcel).unwrap();
    assert_eq!(
        value,
        json!({
            "number": 3,
            "client": 12,
            "status": STATUS_REGISTERED,
            "address": "Main st. 1",
            "created_at": "2024-03-01T10:00:00Z",
        })
    );

    let decoded: Parcel = serde_json::from_value(value).unwrap();
    assert_eq!(decoded, parcel);
}
