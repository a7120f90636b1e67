pub mod directory;
pub mod images;
pub mod lookup;
pub mod prompt;
pub mod providers;
pub mod triage;

pub use directory::{HospitalDirectory, StaticDirectory};
pub use triage::TriageService;
