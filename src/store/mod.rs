pub mod csv_store;
pub mod record_store;

pub use csv_store::QuestionBank;
pub use record_store::RecordStore;
