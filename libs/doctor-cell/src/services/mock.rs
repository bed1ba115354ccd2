use chrono::NaiveDate;

use crate::models::Doctor;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Roster the console starts with when mock seeding is enabled.
pub fn mock_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: "1".to_string(),
            name: "Dr. Uendel Oliveira".to_string(),
            email: "joao.silva@hospital.com".to_string(),
            phone: "(85) 99999-1111".to_string(),
            specialty: "Cardiologia".to_string(),
            crm: "CRM/CE 12345".to_string(),
            address: Some("Rua das Flores, 123 - Aldeota".to_string()),
            birth_date: date(1980, 5, 15),
            created_at: date(2024, 1, 15),
            updated_at: date(2024, 1, 15),
        },
        Doctor {
            id: "2".to_string(),
            name: "Dra. Lívia Acácio".to_string(),
            email: "maria.santos@hospital.com".to_string(),
            phone: "(85) 88888-2222".to_string(),
            specialty: "Pediatria".to_string(),
            crm: "CRM/CE 67890".to_string(),
            address: Some("Av. Beira Mar, 456 - Meireles".to_string()),
            birth_date: date(1975, 8, 22),
            created_at: date(2024, 1, 20),
            updated_at: date(2024, 1, 20),
        },
    ]
}
