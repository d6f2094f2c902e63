//! In-memory record store for the patient roster.

mod lookup;

pub use lookup::*;

use thiserror::Error;
use tracing::debug;

use crate::models::{Patient, PatientDetails, PatientUpdate};
use crate::validate::{validate_date_of_birth, validate_phone_number, ValidationError};

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("patient {0} not found")]
    NotFound(u32),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered collection of patient records.
///
/// Invariant: records are kept sorted ascending by `patient_id`. Ids are
/// handed out by [`PatientStore::next_id`] in strictly increasing order and
/// new records are appended, so the invariant holds across any sequence of
/// adds and deletes. [`find_by_id`] depends on it.
#[derive(Debug, Default)]
pub struct PatientStore {
    patients: Vec<Patient>,
}

impl PatientStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            patients: Vec::new(),
        }
    }

    /// Next identifier to assign: one past the highest id in the store.
    ///
    /// Ids are never reused. A count-based scheme would hand out an id that
    /// collides with a surviving record once anything has been deleted.
    pub fn next_id(&self) -> u32 {
        self.patients.last().map_or(1, |p| p.patient_id + 1)
    }

    /// Validate the supplied fields and append a new record.
    ///
    /// Fails fast on the first invalid field; the store is not mutated on
    /// any error path.
    pub fn add(&mut self, details: PatientDetails) -> StoreResult<Patient> {
        validate_date_of_birth(&details.date_of_birth)?;
        validate_phone_number(&details.phone_number)?;

        let patient = Patient::new(self.next_id(), details);
        self.patients.push(patient.clone());
        debug!(patient_id = patient.patient_id, "patient added");
        Ok(patient)
    }

    /// Look up a record by id.
    pub fn get(&self, patient_id: u32) -> StoreResult<&Patient> {
        let idx =
            find_by_id(&self.patients, patient_id).ok_or(StoreError::NotFound(patient_id))?;
        Ok(&self.patients[idx])
    }

    /// Overwrite the provided fields of an existing record.
    ///
    /// Provided date-of-birth and phone values are validated before the
    /// record is located, so a failed update never mutates the store. The
    /// identifier is never overwritten; `updated_at` is bumped.
    pub fn update(&mut self, patient_id: u32, update: PatientUpdate) -> StoreResult<Patient> {
        if let Some(date_of_birth) = update.date_of_birth.as_deref() {
            validate_date_of_birth(date_of_birth)?;
        }
        if let Some(phone_number) = update.phone_number.as_deref() {
            validate_phone_number(phone_number)?;
        }

        let idx =
            find_by_id(&self.patients, patient_id).ok_or(StoreError::NotFound(patient_id))?;
        let patient = &mut self.patients[idx];
        patient.apply(update);
        debug!(patient_id, "patient updated");
        Ok(patient.clone())
    }

    /// Remove a record by id, returning it.
    pub fn delete(&mut self, patient_id: u32) -> StoreResult<Patient> {
        let idx =
            find_by_id(&self.patients, patient_id).ok_or(StoreError::NotFound(patient_id))?;
        let removed = self.patients.remove(idx);
        debug!(patient_id, "patient deleted");
        Ok(removed)
    }

    /// All records in store order (ascending by id).
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}
