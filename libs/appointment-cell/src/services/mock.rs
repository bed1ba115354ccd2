// libs/appointment-cell/src/services/mock.rs
use chrono::NaiveDate;

use crate::models::{Appointment, AppointmentStatus, TimeSlot};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Appointments the console starts with. They reference the mock doctors
/// and patients by id and carry the snapshot those records had at booking.
pub fn mock_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "1".to_string(),
            patient_id: "1".to_string(),
            doctor_id: "1".to_string(),
            patient_name: "Uendel Martins".to_string(),
            patient_email: "joao@email.com".to_string(),
            patient_phone: "(85) 99999-1111".to_string(),
            doctor_name: "Dr. Uendel Oliveira".to_string(),
            doctor_specialty: "Cardiologia".to_string(),
            date: date(2025, 6, 2),
            time: TimeSlot::H0900,
            status: AppointmentStatus::Scheduled,
            notes: Some("Consulta de rotina - hipertensão".to_string()),
            created_at: date(2025, 5, 30),
            updated_at: date(2025, 5, 30),
        },
        Appointment {
            id: "2".to_string(),
            patient_id: "2".to_string(),
            doctor_id: "2".to_string(),
            patient_name: "Lívia Acácio".to_string(),
            patient_email: "maria@email.com".to_string(),
            patient_phone: "(85) 88888-2222".to_string(),
            doctor_name: "Dra. Lívia Acácio".to_string(),
            doctor_specialty: "Pediatria".to_string(),
            date: date(2025, 6, 1),
            time: TimeSlot::H1430,
            status: AppointmentStatus::Completed,
            notes: Some("Consulta de acompanhamento infantil".to_string()),
            created_at: date(2025, 5, 25),
            updated_at: date(2025, 6, 1),
        },
        Appointment {
            id: "3".to_string(),
            patient_id: "3".to_string(),
            doctor_id: "1".to_string(),
            patient_name: "Antonio Gabriel".to_string(),
            patient_email: "pedro@email.com".to_string(),
            patient_phone: "(85) 77777-3333".to_string(),
            doctor_name: "Dr. Uendel Oliveira".to_string(),
            doctor_specialty: "Cardiologia".to_string(),
            date: date(2025, 6, 3),
            time: TimeSlot::H1000,
            status: AppointmentStatus::Rescheduled,
            notes: Some("Paciente solicitou remarcação".to_string()),
            created_at: date(2025, 5, 28),
            updated_at: date(2025, 5, 31),
        },
    ]
}
