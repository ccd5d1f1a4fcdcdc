pub mod family;
pub mod habit;
pub mod pain;
pub mod snapshot;
pub mod vital;
