pub mod record;
pub mod row;

pub use record::QuestionRecord;
pub use row::QuestionRow;
