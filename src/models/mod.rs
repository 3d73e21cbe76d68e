pub mod absence;
pub mod daily;
pub mod status;
pub mod table;

pub use absence::{AbsenceRecord, SecondarySchema, SourceSchema};
pub use daily::{DailyRecord, Provenance, ReconciliationRow};
pub use status::Status;
pub use table::Table;
