// libs/appointment-cell/src/services/directory.rs
use std::collections::HashSet;
use std::sync::Arc;
use chrono::NaiveDate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_utils::{normalize_optional, Clock};

use crate::models::{
    Appointment, AppointmentError, AppointmentFilter, AppointmentInput, AppointmentStatus,
    DoctorReference, PatientReference, StatusCounts, TimeSlot,
};
use crate::services::reference::ReferenceDataLookup;

/// Input that passed validation, with both references resolved.
#[derive(Debug)]
struct ResolvedInput {
    patient: PatientReference,
    doctor: DoctorReference,
    date: NaiveDate,
    time: TimeSlot,
    status: AppointmentStatus,
    notes: Option<String>,
}

/// Insertion-ordered appointment collection.
///
/// Every mutation validates completely before touching the collection, so a
/// failed call leaves it exactly as it was.
pub struct AppointmentDirectory {
    appointments: Vec<Appointment>,
    // Ids ever held, including deleted ones; never handed out again.
    issued_ids: HashSet<String>,
    lookup: Arc<dyn ReferenceDataLookup>,
    clock: Arc<dyn Clock>,
}

impl AppointmentDirectory {
    pub fn new(lookup: Arc<dyn ReferenceDataLookup>, clock: Arc<dyn Clock>) -> Self {
        Self {
            appointments: Vec::new(),
            issued_ids: HashSet::new(),
            lookup,
            clock,
        }
    }

    /// Insert pre-built records (mock data) as-is, after the current ones.
    pub fn seed(&mut self, appointments: Vec<Appointment>) -> Result<(), AppointmentError> {
        let mut incoming = HashSet::new();
        for appointment in &appointments {
            if self.issued_ids.contains(&appointment.id) || !incoming.insert(appointment.id.as_str()) {
                return Err(AppointmentError::Validation(format!(
                    "appointment id {} is already in use",
                    appointment.id
                )));
            }
        }

        for appointment in appointments {
            self.issued_ids.insert(appointment.id.clone());
            self.appointments.push(appointment);
        }
        info!("Appointment directory seeded, {} records", self.appointments.len());
        Ok(())
    }

    pub fn create(&mut self, input: AppointmentInput) -> Result<Appointment, AppointmentError> {
        debug!("Creating appointment for patient '{}' with doctor '{}'", input.patient_id, input.doctor_id);

        let resolved = self.resolve(input)?;
        let today = self.clock.today();
        let id = self.fresh_id();

        let appointment = Appointment {
            id: id.clone(),
            patient_id: resolved.patient.id,
            doctor_id: resolved.doctor.id,
            patient_name: resolved.patient.name,
            patient_email: resolved.patient.email,
            patient_phone: resolved.patient.phone,
            doctor_name: resolved.doctor.name,
            doctor_specialty: resolved.doctor.specialty,
            date: resolved.date,
            time: resolved.time,
            status: resolved.status,
            notes: resolved.notes,
            created_at: today,
            updated_at: today,
        };

        self.issued_ids.insert(id);
        self.appointments.push(appointment.clone());

        info!(
            "Appointment {} created for {} at {} with {}",
            appointment.id, appointment.date, appointment.time, appointment.doctor_name
        );
        Ok(appointment)
    }

    /// Replace every mutable field of an existing record.
    pub fn update(&mut self, id: &str, input: AppointmentInput) -> Result<Appointment, AppointmentError> {
        let index = self.position(id).ok_or_else(|| {
            warn!("Update requested for unknown appointment {}", id);
            AppointmentError::NotFound(id.to_string())
        })?;

        let resolved = self.resolve(input)?;
        let today = self.clock.today();

        let existing = &self.appointments[index];
        let updated = Appointment {
            id: existing.id.clone(),
            patient_id: resolved.patient.id,
            doctor_id: resolved.doctor.id,
            patient_name: resolved.patient.name,
            patient_email: resolved.patient.email,
            patient_phone: resolved.patient.phone,
            doctor_name: resolved.doctor.name,
            doctor_specialty: resolved.doctor.specialty,
            date: resolved.date,
            time: resolved.time,
            status: resolved.status,
            notes: resolved.notes,
            created_at: existing.created_at,
            updated_at: today,
        };

        if existing.status != updated.status {
            info!("Appointment {} status {} -> {}", id, existing.status, updated.status);
        }
        self.appointments[index] = updated.clone();

        info!("Appointment {} updated", id);
        Ok(updated)
    }

    pub fn delete(&mut self, id: &str) -> Result<(), AppointmentError> {
        let index = self.position(id).ok_or_else(|| {
            warn!("Delete requested for unknown appointment {}", id);
            AppointmentError::NotFound(id.to_string())
        })?;

        self.appointments.remove(index);
        info!("Appointment {} deleted", id);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&Appointment, AppointmentError> {
        self.appointments
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| AppointmentError::NotFound(id.to_string()))
    }

    /// Records matching every set predicate, in insertion order.
    ///
    /// The iterator borrows the directory; call again for a fresh pass.
    pub fn query<'a>(&'a self, filter: &'a AppointmentFilter) -> impl Iterator<Item = &'a Appointment> + 'a {
        debug!("Querying appointments with {:?}", filter);
        self.appointments.iter().filter(move |a| filter.matches(a))
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for appointment in &self.appointments {
            counts.record(appointment.status);
        }
        counts
    }

    /// Slots on `date` not yet held by a live (non-cancelled) appointment
    /// with this doctor. Informational only: create and update do not
    /// enforce it.
    pub fn free_slots(&self, doctor_id: &str, date: NaiveDate) -> Result<Vec<TimeSlot>, AppointmentError> {
        if self.lookup.resolve_doctor(doctor_id).is_none() {
            return Err(AppointmentError::Validation(format!("doctor {} does not exist", doctor_id)));
        }

        let taken: HashSet<TimeSlot> = self
            .appointments
            .iter()
            .filter(|a| a.doctor_id == doctor_id && a.date == date)
            .filter(|a| a.status != AppointmentStatus::Cancelled)
            .map(|a| a.time)
            .collect();

        Ok(TimeSlot::ALL.into_iter().filter(|slot| !taken.contains(slot)).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments.iter()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    fn resolve(&self, input: AppointmentInput) -> Result<ResolvedInput, AppointmentError> {
        let resolved = self.try_resolve(input);
        if let Err(e) = &resolved {
            warn!("Appointment input rejected: {}", e);
        }
        resolved
    }

    fn try_resolve(&self, input: AppointmentInput) -> Result<ResolvedInput, AppointmentError> {
        let patient_id = input.patient_id.trim();
        if patient_id.is_empty() {
            return Err(AppointmentError::Validation("patient_id is required".to_string()));
        }
        let doctor_id = input.doctor_id.trim();
        if doctor_id.is_empty() {
            return Err(AppointmentError::Validation("doctor_id is required".to_string()));
        }

        let date_text = input.date.trim();
        if date_text.is_empty() {
            return Err(AppointmentError::Validation("date is required".to_string()));
        }
        let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d").map_err(|_| {
            AppointmentError::Validation(format!("date '{}' is not a YYYY-MM-DD calendar date", date_text))
        })?;

        let time_text = input.time.trim();
        if time_text.is_empty() {
            return Err(AppointmentError::Validation("time is required".to_string()));
        }
        let time: TimeSlot = time_text.parse()?;

        let status = match normalize_optional(input.status) {
            Some(raw) => raw.trim().parse::<AppointmentStatus>()?,
            None => AppointmentStatus::default(),
        };

        let patient = self
            .lookup
            .resolve_patient(patient_id)
            .ok_or_else(|| AppointmentError::Validation(format!("patient {} does not exist", patient_id)))?;
        let doctor = self
            .lookup
            .resolve_doctor(doctor_id)
            .ok_or_else(|| AppointmentError::Validation(format!("doctor {} does not exist", doctor_id)))?;

        Ok(ResolvedInput {
            patient,
            doctor,
            date,
            time,
            status,
            notes: normalize_optional(input.notes),
        })
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.appointments.iter().position(|a| a.id == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.issued_ids.contains(&id) {
                return id;
            }
        }
    }
}
