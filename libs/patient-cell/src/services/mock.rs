use chrono::NaiveDate;

use crate::models::{BloodType, Patient};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Patients the console starts with when mock seeding is enabled.
pub fn mock_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "1".to_string(),
            name: "Uendel Martins".to_string(),
            email: "joao@email.com".to_string(),
            phone: "(85) 99999-1111".to_string(),
            cpf: "123.456.789-00".to_string(),
            birth_date: date(1990, 3, 15),
            address: "Rua das Palmeiras, 456 - Aldeota, Fortaleza/CE".to_string(),
            emergency_contact: Some("Carlos Martins".to_string()),
            emergency_phone: Some("(85) 88888-1111".to_string()),
            blood_type: Some(BloodType::OPositive),
            allergies: Some("Dipirona, Penicilina".to_string()),
            medications: Some("Omeprazol 20mg".to_string()),
            medical_history: Some("Hipertensão arterial controlada".to_string()),
            created_at: date(2024, 1, 10),
            updated_at: date(2024, 1, 10),
        },
        Patient {
            id: "2".to_string(),
            name: "Lívia Acácio".to_string(),
            email: "maria@email.com".to_string(),
            phone: "(85) 88888-2222".to_string(),
            cpf: "987.654.321-00".to_string(),
            birth_date: date(1985, 7, 22),
            address: "Av. Beira Mar, 789 - Meireles, Fortaleza/CE".to_string(),
            emergency_contact: Some("Maria Acácio".to_string()),
            emergency_phone: Some("(85) 66666-2222".to_string()),
            blood_type: Some(BloodType::APositive),
            allergies: None,
            medications: None,
            medical_history: Some("Cirurgia de apendicite em 2020".to_string()),
            created_at: date(2024, 1, 15),
            updated_at: date(2024, 1, 15),
        },
        Patient {
            id: "3".to_string(),
            name: "Antonio Gabriel".to_string(),
            email: "pedro@email.com".to_string(),
            phone: "(85) 77777-3333".to_string(),
            cpf: "456.789.123-00".to_string(),
            birth_date: date(2012, 9, 4),
            address: "Rua Padre Valdevino, 1200 - Joaquim Távora, Fortaleza/CE".to_string(),
            emergency_contact: Some("Helena Gabriel".to_string()),
            emergency_phone: Some("(85) 95555-3333".to_string()),
            blood_type: Some(BloodType::NotInformed),
            allergies: None,
            medications: None,
            medical_history: None,
            created_at: date(2024, 2, 2),
            updated_at: date(2024, 2, 2),
        },
    ]
}
