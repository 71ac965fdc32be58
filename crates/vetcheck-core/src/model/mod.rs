pub mod record;
pub mod species;

pub use record::CheckupRecord;
pub use species::Species;
