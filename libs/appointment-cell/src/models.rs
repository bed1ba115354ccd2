// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use shared_utils::contains_ignore_case;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// Appointment snapshot.
///
/// Patient and doctor display fields are copied in when the record is
/// written and are not refreshed if the referenced records change later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub doctor_name: String,
    pub doctor_specialty: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    #[serde(rename = "agendada")]
    Scheduled,
    #[serde(rename = "cancelada")]
    Cancelled,
    #[serde(rename = "realizada")]
    Completed,
    #[serde(rename = "remarcada")]
    Rescheduled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Completed,
        AppointmentStatus::Rescheduled,
    ];

    /// Wire value, as stored and filtered on.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "agendada",
            AppointmentStatus::Cancelled => "cancelada",
            AppointmentStatus::Completed => "realizada",
            AppointmentStatus::Rescheduled => "remarcada",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = AppointmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppointmentError::Validation(format!("unknown appointment status '{}'", s)))
    }
}

/// Bookable half-hour slots: mornings 08:00-11:30, afternoons 14:00-17:30.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "08:00")]
    H0800,
    #[serde(rename = "08:30")]
    H0830,
    #[serde(rename = "09:00")]
    H0900,
    #[serde(rename = "09:30")]
    H0930,
    #[serde(rename = "10:00")]
    H1000,
    #[serde(rename = "10:30")]
    H1030,
    #[serde(rename = "11:00")]
    H1100,
    #[serde(rename = "11:30")]
    H1130,
    #[serde(rename = "14:00")]
    H1400,
    #[serde(rename = "14:30")]
    H1430,
    #[serde(rename = "15:00")]
    H1500,
    #[serde(rename = "15:30")]
    H1530,
    #[serde(rename = "16:00")]
    H1600,
    #[serde(rename = "16:30")]
    H1630,
    #[serde(rename = "17:00")]
    H1700,
    #[serde(rename = "17:30")]
    H1730,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 16] = [
        TimeSlot::H0800,
        TimeSlot::H0830,
        TimeSlot::H0900,
        TimeSlot::H0930,
        TimeSlot::H1000,
        TimeSlot::H1030,
        TimeSlot::H1100,
        TimeSlot::H1130,
        TimeSlot::H1400,
        TimeSlot::H1430,
        TimeSlot::H1500,
        TimeSlot::H1530,
        TimeSlot::H1600,
        TimeSlot::H1630,
        TimeSlot::H1700,
        TimeSlot::H1730,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::H0800 => "08:00",
            TimeSlot::H0830 => "08:30",
            TimeSlot::H0900 => "09:00",
            TimeSlot::H0930 => "09:30",
            TimeSlot::H1000 => "10:00",
            TimeSlot::H1030 => "10:30",
            TimeSlot::H1100 => "11:00",
            TimeSlot::H1130 => "11:30",
            TimeSlot::H1400 => "14:00",
            TimeSlot::H1430 => "14:30",
            TimeSlot::H1500 => "15:00",
            TimeSlot::H1530 => "15:30",
            TimeSlot::H1600 => "16:00",
            TimeSlot::H1630 => "16:30",
            TimeSlot::H1700 => "17:00",
            TimeSlot::H1730 => "17:30",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = AppointmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| AppointmentError::Validation(format!("time '{}' is not a bookable slot", s)))
    }
}

// ==============================================================================
// REFERENCE DATA VIEWS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorReference {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientReference {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

// ==============================================================================
// REQUEST/QUERY MODELS
// ==============================================================================

/// Client-supplied fields for create and update.
///
/// Everything arrives as text so that missing or malformed values surface as
/// validation errors rather than body rejections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub patient_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub doctor_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: String,
    /// Wire literal; absent or blank means `agendada`.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentFilter {
    pub search_text: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub date: Option<NaiveDate>,
}

impl AppointmentFilter {
    pub fn matches(&self, appointment: &Appointment) -> bool {
        let matches_search = match self.search_text.as_deref() {
            None | Some("") => true,
            Some(term) => {
                contains_ignore_case(&appointment.patient_name, term)
                    || contains_ignore_case(&appointment.doctor_name, term)
                    || contains_ignore_case(&appointment.doctor_specialty, term)
            }
        };
        let matches_status = self.status.map_or(true, |s| appointment.status == s);
        let matches_date = self.date.map_or(true, |d| appointment.date == d);

        matches_search && matches_status && matches_date
    }
}

// ==============================================================================
// STATISTICS MODELS
// ==============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    #[serde(rename = "agendada")]
    pub scheduled: usize,
    #[serde(rename = "cancelada")]
    pub cancelled: usize,
    #[serde(rename = "realizada")]
    pub completed: usize,
    #[serde(rename = "remarcada")]
    pub rescheduled: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn record(&mut self, status: AppointmentStatus) {
        *self.slot_mut(status) += 1;
        self.total += 1;
    }

    pub fn get(&self, status: AppointmentStatus) -> usize {
        match status {
            AppointmentStatus::Scheduled => self.scheduled,
            AppointmentStatus::Cancelled => self.cancelled,
            AppointmentStatus::Completed => self.completed,
            AppointmentStatus::Rescheduled => self.rescheduled,
        }
    }

    /// Sum of the per-status buckets; always equals `total`.
    pub fn bucket_sum(&self) -> usize {
        AppointmentStatus::ALL.iter().map(|s| self.get(*s)).sum()
    }

    fn slot_mut(&mut self, status: AppointmentStatus) -> &mut usize {
        match status {
            AppointmentStatus::Scheduled => &mut self.scheduled,
            AppointmentStatus::Cancelled => &mut self.cancelled,
            AppointmentStatus::Completed => &mut self.completed,
            AppointmentStatus::Rescheduled => &mut self.rescheduled,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeSlots {
    pub doctor_id: String,
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum AppointmentError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Appointment {0} not found")]
    NotFound(String),

    #[error("Directory write timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },
}
