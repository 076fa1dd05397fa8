use crate::{Address, Property};

#[test]
fn test_property_is_owned_by() {
    let property = Property {
        id: "p-1".into(),
        name: "Fazenda X".into(),
        address: Address::from_line("Estrada Municipal, km 4"),
        total_area_ha: Some(10.0),
        owner_id: "uid-1".into(),
    };

    assert!(property.is_owned_by("uid-1"));
    assert!(!property.is_owned_by("uid-2"));
}

#[test]
fn test_address_display_joins_present_parts() {
    let address = Address {
        street: "Rua A, 10".into(),
        city: Some("Mairiporã".into()),
        state: Some("SP".into()),
        postal_code: None,
    };

    assert_eq!(address.to_string(), "Rua A, 10, Mairiporã, SP");
}
