//! Local care directory — doctors, hospitals, emergency contacts.
//!
//! The roster is an injectable, read-only data source constructed once at
//! startup and shared via `Arc`. The compiled-in Aligarh sample stands in
//! for a real data backend; swapping one in only means building a `Roster`
//! from somewhere else, the filtering below stays untouched.

use serde::{Deserialize, Serialize};

use crate::geo::{haversine_km, Location};

/// Doctors farther than this from the query point are excluded (inclusive).
pub const CATCHMENT_RADIUS_KM: f64 = 5.0;

/// A specialist doctor in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub location: Location,
    /// Free-text category, matched case-insensitively by exact equality.
    pub specialization: String,
    pub contact: String,
}

/// A hospital entry. Contact may be a placeholder where none is published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub name: String,
    pub location: Location,
    pub contact: String,
}

/// A national emergency number.
#[derive(Debug, Clone, Serialize)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub number: &'static str,
}

/// India-wide emergency numbers shown on the emergency screen.
pub const EMERGENCY_CONTACTS: &[EmergencyContact] = &[
    EmergencyContact {
        name: "Police",
        number: "112",
    },
    EmergencyContact {
        name: "Ambulance",
        number: "108",
    },
];

/// Read-only directory of doctors and hospitals.
///
/// Never mutated after construction; concurrent reads need no locking.
pub struct Roster {
    doctors: Vec<Doctor>,
    hospitals: Vec<Hospital>,
}

impl Roster {
    /// Build a roster from explicit entries.
    pub fn new(doctors: Vec<Doctor>, hospitals: Vec<Hospital>) -> Self {
        Self { doctors, hospitals }
    }

    /// Doctors matching `specialization` within the catchment radius of
    /// `location`.
    ///
    /// Matching is exact, case-insensitive equality on the specialization
    /// field; the distance cutoff is inclusive. Results preserve roster
    /// order — no sorting by distance and no result cap, so an empty
    /// vector is an ordinary outcome, not a failure.
    pub fn find_specialists(&self, location: Location, specialization: &str) -> Vec<Doctor> {
        let wanted = specialization.to_lowercase();
        self.doctors
            .iter()
            .filter(|d| d.specialization.to_lowercase() == wanted)
            .filter(|d| haversine_km(location, d.location) <= CATCHMENT_RADIUS_KM)
            .cloned()
            .collect()
    }

    /// All known hospitals.
    ///
    /// The location parameter is accepted for interface stability but not
    /// yet used — this is a stub standing in for a real geographic lookup.
    pub fn list_hospitals(&self, _location: Location) -> Vec<Hospital> {
        self.hospitals.clone()
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Sample roster for the Aligarh area.
    pub fn aligarh_sample() -> Self {
        let doctor = |name: &str, lat: f64, lng: f64, specialization: &str, contact: &str| Doctor {
            name: name.to_string(),
            location: Location::new(lat, lng),
            specialization: specialization.to_string(),
            contact: contact.to_string(),
        };
        let hospital = |name: &str, lat: f64, lng: f64, contact: &str| Hospital {
            name: name.to_string(),
            location: Location::new(lat, lng),
            contact: contact.to_string(),
        };

        Self::new(
            vec![
                doctor("Dr. Anika Verma", 27.9055, 78.0862, "Cardiologist", "987-654-3210"),
                doctor("Dr. Rajesh Khanna", 27.8994, 78.0795, "Dermatologist", "987-987-9870"),
                doctor("Dr. Priya Sharma", 27.8824, 78.0665, "Neurologist", "876-543-2109"),
                doctor("Dr. Amit Kumar", 27.9013, 78.0843, "Pediatrician", "876-876-8760"),
                doctor("Dr. Sunita Rao", 27.8803, 78.0699, "General Physician", "765-432-1098"),
                doctor("Dr. Vikram Singh", 27.9045, 78.0852, "Cardiologist", "999-888-7770"),
                doctor("Dr. Deepa Patel", 27.8984, 78.0775, "Dermatologist", "777-666-5550"),
                doctor("Dr. Rahul Gupta", 27.8794, 78.0635, "Neurologist", "909-808-7070"),
                doctor("Dr. Meera Iyer", 27.8983, 78.0813, "Pediatrician", "989-878-7670"),
                doctor("Dr. Sanjay Verma", 27.8773, 78.0669, "General Physician", "898-979-9690"),
            ],
            vec![
                hospital("Jawaharlal Nehru Medical College, AMU", 27.9035, 78.0842, "0571-2700920"),
                hospital("Aligarh Muslim University Health Service", 27.8974, 78.0785, "N/A"),
                hospital("Private Hospital Aligarh", 27.8804, 78.0645, "N/A"),
                hospital("Mohammad Aslam Children Hospital", 27.8993, 78.0823, "N/A"),
                hospital("M S Eye Hospital", 27.8783, 78.0679, "N/A"),
            ],
        )
    }
}
