//! Hospital and patient lifecycle scenarios.

use super::helpers::{dob, service_over, store};
use rstest::rstest;
use semmelweis::registry::{adapters::memory::InMemoryRegistryStore, domain::Sex};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_entities_are_listed_without_filtering(store: InMemoryRegistryStore) {
    let service = service_over(&store);

    for name in ["City Hospital", "General Hospital", "City Hospital"] {
        service
            .create_hospital(name)
            .await
            .expect("creation should succeed");
    }

    let hospitals = service
        .list_hospitals()
        .await
        .expect("listing should succeed");
    assert_eq!(hospitals.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn two_bobs_with_identical_attributes_stay_independent(store: InMemoryRegistryStore) {
    let service = service_over(&store);

    let first_bob = service
        .create_patient("Bob", Sex::Male, dob())
        .await
        .expect("creation should succeed");
    let second_bob = service
        .create_patient("Bob", Sex::Male, dob())
        .await
        .expect("creation should succeed");

    assert_ne!(first_bob.id(), second_bob.id());

    // Deleting one Bob must not disturb the other.
    assert!(
        service
            .delete_patient(first_bob.id())
            .await
            .expect("delete should succeed")
    );
    let survivor = service
        .find_patient(second_bob.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(survivor, Some(second_bob.clone()));

    assert!(
        service
            .delete_patient(second_bob.id())
            .await
            .expect("delete should succeed")
    );
    assert!(
        !service
            .delete_patient(second_bob.id())
            .await
            .expect("repeat delete should not error")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn hospital_rename_survives_round_trip(store: InMemoryRegistryStore) {
    let service = service_over(&store);
    let hospital = service
        .create_hospital("City Hospital")
        .await
        .expect("creation should succeed");

    service
        .update_hospital(hospital.id(), "Greater City Hospital")
        .await
        .expect("update should succeed");

    let found = service
        .find_hospital(hospital.id())
        .await
        .expect("lookup should succeed")
        .expect("hospital should exist");
    assert_eq!(found.name(), "Greater City Hospital");
}
