// libs/appointment-cell/tests/directory_test.rs
use std::collections::HashSet;
use std::sync::Arc;

use assert_matches::assert_matches;

use appointment_cell::{
    mock_appointments, AppointmentDirectory, AppointmentError, AppointmentFilter,
    AppointmentInput, AppointmentStatus, RegistryLookup, TimeSlot,
};
use doctor_cell::{mock_doctors, DoctorRegistry, DoctorRequest, SharedDoctorRegistry};
use patient_cell::{mock_patients, PatientRegistry};
use shared_utils::test_utils::{fixed_clock, fixture_today, ymd};
use shared_utils::FixedClock;

struct Fixture {
    directory: AppointmentDirectory,
    doctors: SharedDoctorRegistry,
    clock: Arc<FixedClock>,
}

fn fixture(with_mock_appointments: bool) -> Fixture {
    let clock = fixed_clock();

    let mut doctors = DoctorRegistry::new(clock.clone());
    doctors.seed(mock_doctors()).unwrap();
    let mut patients = PatientRegistry::new(clock.clone());
    patients.seed(mock_patients()).unwrap();

    let doctors = doctors.into_shared();
    let lookup = RegistryLookup::new(doctors.clone(), patients.into_shared());
    let mut directory = AppointmentDirectory::new(Arc::new(lookup), clock.clone());
    if with_mock_appointments {
        directory.seed(mock_appointments()).unwrap();
    }

    Fixture { directory, doctors, clock }
}

fn input(patient_id: &str, doctor_id: &str, date: &str, time: &str) -> AppointmentInput {
    AppointmentInput {
        patient_id: patient_id.to_string(),
        doctor_id: doctor_id.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        status: None,
        notes: None,
    }
}

fn ids(directory: &AppointmentDirectory, filter: &AppointmentFilter) -> Vec<String> {
    directory.query(filter).map(|a| a.id.clone()).collect()
}

#[test]
fn test_create_scenario_with_explicit_and_default_status() {
    let mut fx = fixture(false);

    let mut explicit = input("1", "1", "2025-06-02", "09:00");
    explicit.status = Some("agendada".to_string());
    let created = fx.directory.create(explicit).unwrap();

    assert_eq!(created.patient_id, "1");
    assert_eq!(created.doctor_id, "1");
    assert_eq!(created.patient_name, "Uendel Martins");
    assert_eq!(created.doctor_name, "Dr. Uendel Oliveira");
    assert_eq!(created.date, ymd(2025, 6, 2));
    assert_eq!(created.time, TimeSlot::H0900);
    assert_eq!(created.status, AppointmentStatus::Scheduled);
    assert_eq!(created.created_at, fixture_today());
    assert_eq!(created.updated_at, fixture_today());

    let defaulted = fx.directory.create(input("2", "2", "2025-06-02", "09:30")).unwrap();
    assert_eq!(defaulted.status, AppointmentStatus::Scheduled);

    assert_eq!(fx.directory.len(), 2);
    assert_eq!(fx.directory.get(&created.id).unwrap(), &created);
}

#[test]
fn test_ids_unique_across_creates_and_deletes() {
    let mut fx = fixture(true);
    let mut seen: HashSet<String> = fx.directory.iter().map(|a| a.id.clone()).collect();

    for i in 0..50 {
        let slot = TimeSlot::ALL[i % TimeSlot::ALL.len()].as_str();
        let created = fx.directory.create(input("1", "2", "2025-07-01", slot)).unwrap();
        assert!(seen.insert(created.id.clone()), "id {} issued twice", created.id);
        if i % 3 == 0 {
            fx.directory.delete(&created.id).unwrap();
        }
    }
}

#[test]
fn test_empty_query_returns_everything_in_insertion_order() {
    let mut fx = fixture(true);
    let created = fx.directory.create(input("2", "1", "2025-05-01", "08:00")).unwrap();

    let all = ids(&fx.directory, &AppointmentFilter::default());
    assert_eq!(all, vec!["1".to_string(), "2".to_string(), "3".to_string(), created.id]);
}

#[test]
fn test_query_is_restartable() {
    let fx = fixture(true);
    let filter = AppointmentFilter {
        search_text: Some("uendel".to_string()),
        ..AppointmentFilter::default()
    };

    let first = ids(&fx.directory, &filter);
    let second = ids(&fx.directory, &filter);
    assert_eq!(first, second);
    assert_eq!(first, vec!["1".to_string(), "3".to_string()]);
}

#[test]
fn test_search_cardio_matches_specialty_case_insensitively() {
    let mut fx = fixture(false);
    let cardio = fx.directory.create(input("2", "1", "2025-06-02", "10:30")).unwrap();
    fx.directory.create(input("3", "2", "2025-06-02", "10:30")).unwrap();

    let filter = AppointmentFilter {
        search_text: Some("cardio".to_string()),
        ..AppointmentFilter::default()
    };
    assert_eq!(ids(&fx.directory, &filter), vec![cardio.id]);
}

#[test]
fn test_search_matches_patient_or_doctor_names() {
    let fx = fixture(true);

    let by_patient = AppointmentFilter {
        search_text: Some("ANTONIO".to_string()),
        ..AppointmentFilter::default()
    };
    assert_eq!(ids(&fx.directory, &by_patient), vec!["3".to_string()]);

    // "Lívia" is both a patient and a doctor name on appointment 2.
    let by_either = AppointmentFilter {
        search_text: Some("lívia".to_string()),
        ..AppointmentFilter::default()
    };
    assert_eq!(ids(&fx.directory, &by_either), vec!["2".to_string()]);
}

#[test]
fn test_predicates_are_anded() {
    let fx = fixture(true);

    let filter = AppointmentFilter {
        search_text: Some("cardiologia".to_string()),
        status: Some(AppointmentStatus::Rescheduled),
        date: Some(ymd(2025, 6, 3)),
    };
    assert_eq!(ids(&fx.directory, &filter), vec!["3".to_string()]);

    let wrong_date = AppointmentFilter {
        date: Some(ymd(2025, 6, 2)),
        ..filter
    };
    assert!(ids(&fx.directory, &wrong_date).is_empty());
}

#[test]
fn test_status_filter_agrees_with_status_counts() {
    let mut fx = fixture(true);
    let mut cancelled = input("1", "1", "2025-06-10", "15:00");
    cancelled.status = Some(AppointmentStatus::Cancelled.to_string());
    fx.directory.create(cancelled).unwrap();
    fx.directory.create(input("3", "2", "2025-06-11", "16:00")).unwrap();

    let counts = fx.directory.status_counts();
    for status in AppointmentStatus::ALL {
        let filter = AppointmentFilter {
            status: Some(status),
            ..AppointmentFilter::default()
        };
        let matched: Vec<_> = fx.directory.query(&filter).collect();
        assert!(matched.iter().all(|a| a.status == status));
        assert_eq!(matched.len(), counts.get(status), "mismatch for {}", status);
    }
}

#[test]
fn test_status_counts_track_every_mutation() {
    let mut fx = fixture(false);
    let empty = fx.directory.status_counts();
    assert_eq!(empty.total, 0);
    assert_eq!(empty.bucket_sum(), 0);

    let a = fx.directory.create(input("1", "1", "2025-06-02", "08:00")).unwrap();
    let b = fx.directory.create(input("2", "2", "2025-06-02", "08:30")).unwrap();

    let mut done = input("1", "1", "2025-06-02", "08:00");
    done.status = Some(AppointmentStatus::Completed.to_string());
    fx.directory.update(&a.id, done).unwrap();
    fx.directory.delete(&b.id).unwrap();

    let counts = fx.directory.status_counts();
    assert_eq!(counts.total, fx.directory.len());
    assert_eq!(counts.bucket_sum(), counts.total);
    assert_eq!(counts.completed, 1);
    assert_eq!(counts.scheduled, 0);
    assert_eq!(counts.cancelled, 0);
    assert_eq!(counts.rescheduled, 0);
}

#[test]
fn test_update_then_get_returns_new_values_and_keeps_created_at() {
    let mut fx = fixture(true);
    fx.clock.set(ymd(2025, 6, 5));

    let mut change = input("3", "2", "2025-06-09", "17:30");
    change.status = Some(AppointmentStatus::Rescheduled.to_string());
    change.notes = Some("Remarcada para pediatria".to_string());
    fx.directory.update("3", change).unwrap();

    let stored = fx.directory.get("3").unwrap();
    assert_eq!(stored.doctor_name, "Dra. Lívia Acácio");
    assert_eq!(stored.doctor_specialty, "Pediatria");
    assert_eq!(stored.date, ymd(2025, 6, 9));
    assert_eq!(stored.time, TimeSlot::H1730);
    assert_eq!(stored.notes.as_deref(), Some("Remarcada para pediatria"));
    assert_eq!(stored.created_at, ymd(2025, 5, 28));
    assert_eq!(stored.updated_at, ymd(2025, 6, 5));
}

#[test]
fn test_update_replaces_status_and_notes_when_omitted() {
    let mut fx = fixture(true);

    let updated = fx.directory.update("2", input("2", "2", "2025-06-01", "14:30")).unwrap();
    assert_eq!(updated.status, AppointmentStatus::Scheduled);
    assert_eq!(updated.notes, None);
}

#[test]
fn test_update_unknown_id_leaves_directory_unchanged() {
    let mut fx = fixture(true);
    let before: Vec<_> = fx.directory.iter().cloned().collect();

    let result = fx.directory.update("999", input("1", "1", "2025-06-02", "09:00"));
    assert_matches!(result, Err(AppointmentError::NotFound(id)) if id == "999");

    let after: Vec<_> = fx.directory.iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_failed_update_validation_is_all_or_nothing() {
    let mut fx = fixture(true);
    let before = fx.directory.get("1").unwrap().clone();

    let result = fx.directory.update("1", input("1", "42", "2025-06-02", "09:00"));
    assert_matches!(result, Err(AppointmentError::Validation(msg)) if msg.contains("doctor 42"));

    let result = fx.directory.update("1", input("1", "1", "2025-06-02", "12:15"));
    assert_matches!(result, Err(AppointmentError::Validation(_)));

    assert_eq!(fx.directory.get("1").unwrap(), &before);
}

#[test]
fn test_create_with_unknown_references_is_rejected() {
    let mut fx = fixture(true);

    assert_matches!(
        fx.directory.create(input("404", "1", "2025-06-02", "09:00")),
        Err(AppointmentError::Validation(msg)) if msg.contains("patient 404")
    );
    assert_matches!(
        fx.directory.create(input("1", "1", "", "09:00")),
        Err(AppointmentError::Validation(msg)) if msg.contains("date")
    );
    assert_matches!(
        fx.directory.create(input("1", "1", "2025-02-30", "09:00")),
        Err(AppointmentError::Validation(_))
    );
    assert_eq!(fx.directory.len(), 3);
}

#[test]
fn test_delete_then_get_is_not_found() {
    let mut fx = fixture(true);

    fx.directory.delete("2").unwrap();
    assert_matches!(fx.directory.get("2"), Err(AppointmentError::NotFound(_)));
    assert_matches!(fx.directory.delete("2"), Err(AppointmentError::NotFound(_)));
    assert_eq!(fx.directory.len(), 2);
}

#[test]
fn test_snapshot_is_not_resynced_when_doctor_changes() {
    let mut fx = fixture(true);

    fx.doctors
        .write()
        .unwrap()
        .update(
            "1",
            DoctorRequest {
                name: "Dr. Uendel Oliveira Filho".to_string(),
                email: "uendel@hospital.com".to_string(),
                phone: "(85) 99999-1111".to_string(),
                specialty: "Cardiologia Intervencionista".to_string(),
                crm: "CRM/CE 12345".to_string(),
                address: None,
                birth_date: ymd(1980, 5, 15),
            },
        )
        .unwrap();

    assert_eq!(fx.directory.get("1").unwrap().doctor_name, "Dr. Uendel Oliveira");

    // Rewriting the record picks up the current reference data.
    let rewritten = fx.directory.update("1", input("1", "1", "2025-06-02", "09:00")).unwrap();
    assert_eq!(rewritten.doctor_name, "Dr. Uendel Oliveira Filho");
    assert_eq!(rewritten.doctor_specialty, "Cardiologia Intervencionista");
}

#[test]
fn test_deleted_doctor_keeps_existing_snapshots_but_blocks_new_bookings() {
    let mut fx = fixture(true);
    fx.doctors.write().unwrap().delete("2").unwrap();

    assert_eq!(fx.directory.get("2").unwrap().doctor_name, "Dra. Lívia Acácio");
    assert_matches!(
        fx.directory.create(input("2", "2", "2025-06-20", "08:00")),
        Err(AppointmentError::Validation(_))
    );
}
