use serde::{Deserialize, Serialize};

use crate::{
    consts::consts::StudentName,
    model::{headers::HeaderBag, person::RosterEntry, student::Student},
};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum Statement {
    /// Appends the caller's header bag to the roster, returns the roster as
    /// it stood before this visit
    RecordVisit(HeaderBag),
    ListStudents,
    AddStudents(Vec<StudentName>),
    RemoveStudents(Vec<StudentName>),
}

impl Statement {
    pub fn log_format(&self) -> String {
        match self {
            Statement::RecordVisit(visitor) => format!("RecordVisit [Headers: {}]", visitor.len()),
            Statement::ListStudents => "ListStudents".to_string(),
            Statement::AddStudents(names) => format!("AddStudents [Count: {}]", names.len()),
            Statement::RemoveStudents(names) => format!("RemoveStudents [Count: {}]", names.len()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum StatementResult {
    /// Used for store status messages
    SuccessStatus(String),
    Roster(Vec<RosterEntry>),
    Students(Vec<Student>),
}

impl StatementResult {
    pub fn roster(self) -> Vec<RosterEntry> {
        if let StatementResult::Roster(entries) = self {
            entries
        } else {
            panic!("Statement result is not of type Roster")
        }
    }

    pub fn students(self) -> Vec<Student> {
        if let StatementResult::Students(students) = self {
            students
        } else {
            panic!("Statement result is not of type Students")
        }
    }

    pub fn success_status(self) -> String {
        if let StatementResult::SuccessStatus(status) = self {
            status
        } else {
            panic!("Statement result is not of type SuccessStatus")
        }
    }
}
