use serde::{Deserialize, Serialize};

/// A bookable hospital row served by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: u32,
    pub name: String,
    pub city: String,
}
