//! Patient models.

use serde::{Deserialize, Serialize};

/// A single patient record on the roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Unique identifier, assigned by the store at creation and never changed
    pub patient_id: u32,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Date of birth in `dd-mm-yyyy` form
    pub date_of_birth: String,
    /// Hometown
    pub hometown: String,
    /// House number (free-form text, e.g. "12" or "C4/7")
    pub house_number: String,
    /// Phone number in `ddd-ddd-dddd` form
    pub phone_number: String,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

/// The caller-supplied fields for a new record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientDetails {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub hometown: String,
    pub house_number: String,
    pub phone_number: String,
}

/// A partial update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatientUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub hometown: Option<String>,
    pub house_number: Option<String>,
    pub phone_number: Option<String>,
}

impl Patient {
    /// Create a new record with the given identifier.
    pub fn new(patient_id: u32, details: PatientDetails) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            patient_id,
            first_name: details.first_name,
            last_name: details.last_name,
            date_of_birth: details.date_of_birth,
            hometown: details.hometown,
            house_number: details.house_number,
            phone_number: details.phone_number,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overwrite every provided field and bump `updated_at`.
    /// The identifier is never touched.
    pub fn apply(&mut self, update: PatientUpdate) {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(date_of_birth) = update.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(hometown) = update.hometown {
            self.hometown = hometown;
        }
        if let Some(house_number) = update.house_number {
            self.house_number = house_number;
        }
        if let Some(phone_number) = update.phone_number {
            self.phone_number = phone_number;
        }
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }
}
