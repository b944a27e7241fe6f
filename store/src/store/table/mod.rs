use thiserror::Error;

pub mod roster;
pub mod students;

#[derive(Error, Debug)]
pub enum ApplyErrors {
    // Constraints
    #[error("Cannot add a student with a blank name")]
    EmptyStudentName,
}
