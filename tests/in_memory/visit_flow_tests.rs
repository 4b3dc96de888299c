//! Registration and relationship listing scenarios.

use super::helpers::{seed_city_hospital, service_over, store, visit_date};
use rstest::rstest;
use semmelweis::registry::{
    adapters::memory::InMemoryRegistryStore,
    domain::{Patient, PatientId},
    ports::RegistryStore,
};
use std::collections::HashSet;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn city_hospital_lists_exactly_three_distinct_patients(store: InMemoryRegistryStore) {
    let service = service_over(&store);
    let (hospital, patients) = seed_city_hospital(&service)
        .await
        .expect("seeding should succeed");

    for patient in &patients {
        service
            .register_visit(hospital.id(), patient.id(), Some(visit_date()))
            .await
            .expect("registration should succeed");
    }

    let listed = service
        .patients_of_hospital(hospital.id())
        .await
        .expect("listing should succeed");

    assert_eq!(listed.len(), 3);
    let listed_ids: HashSet<PatientId> = listed.iter().map(Patient::id).collect();
    let seeded_ids: HashSet<PatientId> = patients.iter().map(Patient::id).collect();
    assert_eq!(listed_ids, seeded_ids);

    let listed_names: Vec<&str> = listed.iter().map(Patient::name).collect();
    assert_eq!(listed_names, vec!["Alice", "Bob", "Charlie"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn re_registration_changes_neither_listing(store: InMemoryRegistryStore) {
    let service = service_over(&store);
    let (hospital, patients) = seed_city_hospital(&service)
        .await
        .expect("seeding should succeed");
    let alice = patients.first().expect("seeded patient");

    for _ in 0..4 {
        service
            .register_visit(hospital.id(), alice.id(), Some(visit_date()))
            .await
            .expect("registration should succeed");
    }

    let listed_patients = service
        .patients_of_hospital(hospital.id())
        .await
        .expect("listing should succeed");
    let listed_hospitals = service
        .hospitals_of_patient(alice.id())
        .await
        .expect("listing should succeed");

    assert_eq!(listed_patients.len(), 1);
    assert_eq!(listed_hospitals.len(), 1);

    // The visit rows themselves are all retained; only the listings dedup.
    let visits = store
        .visits_by_patient(alice.id())
        .await
        .expect("store query");
    assert_eq!(visits.len(), 4);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_registration_leaves_no_trace(store: InMemoryRegistryStore) {
    let service = service_over(&store);
    let (hospital, patients) = seed_city_hospital(&service)
        .await
        .expect("seeding should succeed");
    let alice = patients.first().expect("seeded patient");

    let before = store
        .visits_by_hospital(hospital.id())
        .await
        .expect("store query")
        .len();
    let result = service
        .register_visit(hospital.id(), PatientId::new(), Some(visit_date()))
        .await;
    let after = store
        .visits_by_hospital(hospital.id())
        .await
        .expect("store query")
        .len();

    assert!(result.is_err());
    assert_eq!(before, after);

    // A valid registration afterwards still works.
    service
        .register_visit(hospital.id(), alice.id(), Some(visit_date()))
        .await
        .expect("registration should succeed");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_visited_patient_leaves_a_skipped_dangling_visit(
    store: InMemoryRegistryStore,
) {
    let service = service_over(&store);
    let (hospital, patients) = seed_city_hospital(&service)
        .await
        .expect("seeding should succeed");

    for patient in &patients {
        service
            .register_visit(hospital.id(), patient.id(), Some(visit_date()))
            .await
            .expect("registration should succeed");
    }
    let bob = patients.get(1).expect("seeded patient");
    service
        .delete_patient(bob.id())
        .await
        .expect("delete should succeed");

    // The visit row survives the delete; only the listing skips it.
    let visits = store
        .visits_by_hospital(hospital.id())
        .await
        .expect("store query");
    assert_eq!(visits.len(), 3);

    let listed = service
        .patients_of_hospital(hospital.id())
        .await
        .expect("listing should succeed");
    let listed_names: Vec<&str> = listed.iter().map(Patient::name).collect();
    assert_eq!(listed_names, vec!["Alice", "Charlie"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn patient_visiting_many_hospitals_sees_each_once(store: InMemoryRegistryStore) {
    let service = service_over(&store);
    let (city, patients) = seed_city_hospital(&service)
        .await
        .expect("seeding should succeed");
    let general = service
        .create_hospital("General Hospital")
        .await
        .expect("creation should succeed");
    let alice = patients.first().expect("seeded patient");

    for hospital_id in [city.id(), general.id(), city.id(), general.id()] {
        service
            .register_visit(hospital_id, alice.id(), Some(visit_date()))
            .await
            .expect("registration should succeed");
    }

    let listed = service
        .hospitals_of_patient(alice.id())
        .await
        .expect("listing should succeed");
    assert_eq!(listed.len(), 2);
    let unique: HashSet<_> = listed.iter().map(semmelweis::registry::domain::Hospital::id).collect();
    assert_eq!(unique.len(), 2);
}
