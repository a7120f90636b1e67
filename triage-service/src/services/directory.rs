//! Hospital directory lookup.

use crate::models::Hospital;
use async_trait::async_trait;
use service_core::error::AppError;

/// Source of bookable hospitals.
///
/// Async so a database-backed implementation can slot in without
/// touching the handlers.
#[async_trait]
pub trait HospitalDirectory: Send + Sync {
    /// List hospitals, optionally narrowed to a city.
    ///
    /// The filter is a case-insensitive substring match; an empty or
    /// absent filter returns every hospital.
    async fn list(&self, city_filter: Option<&str>) -> Result<Vec<Hospital>, AppError>;
}

/// In-memory directory seeded with the launch partner hospitals.
pub struct StaticDirectory {
    hospitals: Vec<Hospital>,
}

impl StaticDirectory {
    pub fn seeded() -> Self {
        let hospitals = vec![
            Hospital {
                id: 1,
                name: "CityCare Hospital".to_string(),
                city: "Lagos".to_string(),
            },
            Hospital {
                id: 2,
                name: "Prime Medical Center".to_string(),
                city: "Lagos".to_string(),
            },
            Hospital {
                id: 3,
                name: "Sunrise Clinic".to_string(),
                city: "Abuja".to_string(),
            },
            Hospital {
                id: 4,
                name: "Greenfield Hospital".to_string(),
                city: "Abuja".to_string(),
            },
            Hospital {
                id: 5,
                name: "Hopewell Hospital".to_string(),
                city: "Kano".to_string(),
            },
        ];

        Self { hospitals }
    }
}

#[async_trait]
impl HospitalDirectory for StaticDirectory {
    async fn list(&self, city_filter: Option<&str>) -> Result<Vec<Hospital>, AppError> {
        let hospitals = match city_filter {
            Some(city) if !city.is_empty() => {
                let needle = city.to_lowercase();
                self.hospitals
                    .iter()
                    .filter(|h| h.city.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
            _ => self.hospitals.clone(),
        };

        Ok(hospitals)
    }
}
