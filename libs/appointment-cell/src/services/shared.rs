// libs/appointment-cell/src/services/shared.rs
use std::sync::Arc;
use std::time::Duration;
use chrono::NaiveDate;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::warn;

use crate::models::{
    Appointment, AppointmentError, AppointmentFilter, AppointmentInput, StatusCounts, TimeSlot,
};
use crate::services::directory::AppointmentDirectory;

/// Directory handle shared between request handlers.
///
/// Writers are serialized through the lock and give up with
/// `AppointmentError::Timeout` if it cannot be taken within the configured
/// bound. The mutation itself runs only after the lock is held, so a timed
/// out call changes nothing. Readers get owned copies taken under the read
/// lock.
#[derive(Clone)]
pub struct SharedAppointmentDirectory {
    inner: Arc<RwLock<AppointmentDirectory>>,
    write_timeout: Duration,
}

impl SharedAppointmentDirectory {
    pub fn new(directory: AppointmentDirectory, write_timeout: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
            write_timeout,
        }
    }

    pub async fn create(&self, input: AppointmentInput) -> Result<Appointment, AppointmentError> {
        self.write().await?.create(input)
    }

    pub async fn update(&self, id: &str, input: AppointmentInput) -> Result<Appointment, AppointmentError> {
        self.write().await?.update(id, input)
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppointmentError> {
        self.write().await?.delete(id)
    }

    pub async fn get(&self, id: &str) -> Result<Appointment, AppointmentError> {
        self.inner.read().await.get(id).cloned()
    }

    pub async fn query(&self, filter: &AppointmentFilter) -> Vec<Appointment> {
        self.inner.read().await.query(filter).cloned().collect()
    }

    pub async fn status_counts(&self) -> StatusCounts {
        self.inner.read().await.status_counts()
    }

    pub async fn free_slots(&self, doctor_id: &str, date: NaiveDate) -> Result<Vec<TimeSlot>, AppointmentError> {
        self.inner.read().await.free_slots(doctor_id, date)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Consistent view for several reads in a row. Writers wait while it is held.
    pub async fn read(&self) -> RwLockReadGuard<'_, AppointmentDirectory> {
        self.inner.read().await
    }

    async fn write(&self) -> Result<RwLockWriteGuard<'_, AppointmentDirectory>, AppointmentError> {
        tokio::time::timeout(self.write_timeout, self.inner.write())
            .await
            .map_err(|_| {
                let timeout_ms = self.write_timeout.as_millis() as u64;
                warn!("Appointment directory write lock not acquired within {} ms", timeout_ms);
                AppointmentError::Timeout { timeout_ms }
            })
    }
}
