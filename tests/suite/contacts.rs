//! Contact store tests against an on-disk database

use tally_contacts::{Contact, ContactError, ContactId, ContactStore, sample_contacts};

use crate::common::temp_store;

#[test]
fn create_read_update_delete() {
    let mut fixture = temp_store();
    let store = &mut fixture.store;

    let fred = store
        .create(&Contact::new(
            "Fred Flintstone",
            "301 Cobblestone Way",
            "fred@bedrock.com",
            "555-0101",
        ))
        .unwrap();
    let id = fred.id.expect("store assigns an id");

    let mut changed = fred.clone();
    changed.address = "Rock Quarry".to_string();
    let updated = store.update(&changed).unwrap().expect("row exists");
    assert_eq!(updated.address, "Rock Quarry");
    assert_eq!(store.get_by_id(id).unwrap(), Some(updated.clone()));

    assert!(store.delete(&updated).unwrap());
    assert_eq!(store.get_by_id(id).unwrap(), None);
    assert!(store.get_all().unwrap().is_empty());
}

#[test]
fn update_and_delete_require_an_id() {
    let mut fixture = temp_store();
    let unsaved = Contact::new("Dino", "", "", "");

    assert!(matches!(
        fixture.store.update(&unsaved),
        Err(ContactError::MissingId { .. })
    ));
    assert!(matches!(
        fixture.store.delete(&unsaved),
        Err(ContactError::MissingId { .. })
    ));
}

#[test]
fn delete_unknown_id_is_false() {
    let mut fixture = temp_store();
    assert!(!fixture.store.delete_by_id(ContactId::new(404)).unwrap());
}

#[test]
fn data_survives_reopen() {
    let mut fixture = temp_store();
    let seeded = fixture.store.seed_sample_data(&sample_contacts()).unwrap();
    assert_eq!(seeded, 6);

    let reopened = ContactStore::open(&fixture.path).unwrap();
    let names: Vec<String> = reopened
        .get_all()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(
        names,
        [
            "Bamm-Bamm Rubble",
            "Barney Rubble",
            "Betty Rubble",
            "Fred Flintstone",
            "Pebbles Flintstone",
            "Wilma Flintstone",
        ]
    );
}

#[test]
fn contacts_serialize_to_json() {
    let mut fixture = temp_store();
    let saved = fixture
        .store
        .create(&Contact::new("Betty Rubble", "", "betty@bedrock.com", ""))
        .unwrap();

    let json = serde_json::to_value(&saved).unwrap();
    assert_eq!(json["name"], "Betty Rubble");
    assert_eq!(json["email"], "betty@bedrock.com");
    assert_eq!(json["id"], saved.id.unwrap().value());
}
