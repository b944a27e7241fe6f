pub mod envelope;
pub mod headers;
pub mod person;
pub mod statement;
pub mod student;
