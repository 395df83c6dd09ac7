mod category;
mod fluid;
mod medication;
mod mood;
mod profile;
mod records;
mod report_config;
mod session;
mod vital;
mod weight;

pub use category::Category;
pub use fluid::FluidEntry;
pub use medication::MedicationEntry;
pub use mood::MoodEntry;
pub use profile::{Modality, PatientProfile};
pub use records::HealthRecords;
pub use report_config::ReportConfig;
pub use session::{DialysisSession, SessionType};
pub use vital::{VitalEntry, VitalType};
pub use weight::WeightEntry;
