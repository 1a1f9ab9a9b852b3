mod resident;
mod resident_field;

pub use resident::{Gender, ResidentEntry, ResidentRecord};
pub use resident_field::ResidentField;
