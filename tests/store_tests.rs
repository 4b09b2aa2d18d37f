mod common;

use common::create_mock_seed;
use yard_control::config::{SeedTruck, YardSeed};
use yard_control::errors::YardError;
use yard_control::models::{DockAttributes, NewTruck, Role, TruckType};
use yard_control::state_management::{MemoryStore, YardStore};

async fn create_mock_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.initialize_from_settings(&create_mock_seed()).await.unwrap();
    store
}

#[tokio::test]
async fn test_plates_are_normalized_and_unique() {
    let store = create_mock_store().await;

    let truck = store.find_truck_by_plate("  abc123 ").await.unwrap().unwrap();
    assert_eq!(truck.plate, "ABC123");

    let duplicate = store.create_truck(NewTruck::new("abc123".into(), TruckType::Dry, None, None)).await;
    assert!(matches!(duplicate, Err(YardError::Conflict(_))));

    let created = store.create_truck(NewTruck::new(" new001".into(), TruckType::Refrigerated, None, None)).await.unwrap();
    assert_eq!(created.plate, "NEW001");
    assert_eq!(store.list_trucks().await.unwrap().len(), 4);
}

#[tokio::test]
async fn test_seed_links_trucks_to_drivers() {
    let store = create_mock_store().await;
    let driver = store.find_user_by_code("CH002").await.unwrap().unwrap();

    let truck = store.find_truck_by_driver(driver.id).await.unwrap().unwrap();
    assert_eq!(truck.plate, "XYZ789");
}

#[tokio::test]
async fn test_seed_with_unknown_driver_is_rejected() {
    let store = MemoryStore::new();
    let seed = YardSeed {
        users: vec![],
        trucks: vec![SeedTruck {
            plate: "GHOST1".into(),
            truck_type: TruckType::Dry,
            driver_code: Some("NOPE".into()),
            capacity: None,
        }],
        docks: vec![],
    };

    let result = store.initialize_from_settings(&seed).await;
    assert!(matches!(result, Err(YardError::NotFound(_))));
}

#[tokio::test]
async fn test_users_with_role_and_authenticate() {
    let store = create_mock_store().await;

    let drivers = store.users_with_role(Role::Driver).await.unwrap();
    assert_eq!(drivers.len(), 3);
    assert_eq!(store.users_with_role(Role::Admin).await.unwrap().len(), 0);

    assert!(store.authenticate("CH001", "1111").await.unwrap().is_some());
    assert!(store.authenticate("CH001", "2222").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_dock_attributes() {
    let store = create_mock_store().await;
    let cold = store.list_docks().await.unwrap().into_iter().find(|dock| dock.number == 4).unwrap();
    assert_eq!(cold.permitted_type, Some(TruckType::Refrigerated));

    let updated = store.update_dock_attributes(cold.id, DockAttributes {
        name: Some("Any load".into()),
        permitted_type: Some(None),
        active: None,
    }).await.unwrap();
    assert_eq!(updated.name.as_deref(), Some("Any load"));
    assert_eq!(updated.permitted_type, None);
    assert!(updated.active);

    let missing = store.update_dock_attributes(999, DockAttributes::default()).await;
    assert!(matches!(missing, Err(YardError::NotFound(_))));
}
