use crate::{consts::consts::StudentName, model::student::Student};

use super::ApplyErrors;

/// Student rows keyed by name. Duplicate names are allowed, matching plain
/// insert semantics; a delete removes every matching row.
pub struct StudentTable {
    pub student_rows: Vec<Student>,
}

impl StudentTable {
    pub fn new() -> Self {
        Self {
            student_rows: Vec::new(),
        }
    }

    pub fn list(&self) -> Vec<Student> {
        self.student_rows.clone()
    }

    /// Inserts a batch of students. The whole batch is validated before any
    /// row is written, so a bad name leaves the table untouched.
    pub fn insert_many(&mut self, names: Vec<StudentName>) -> Result<(), ApplyErrors> {
        if names.iter().any(StudentName::is_blank) {
            return Err(ApplyErrors::EmptyStudentName);
        }

        self.student_rows
            .extend(names.into_iter().map(Student::new));

        Ok(())
    }

    /// Removes every row matching any of the given names. Unknown names are
    /// a no-op. Returns the number of rows removed.
    pub fn remove_many(&mut self, names: &[StudentName]) -> usize {
        let before = self.student_rows.len();

        self.student_rows
            .retain(|student| !names.contains(&student.name));

        before - self.student_rows.len()
    }
}

impl Default for StudentTable {
    fn default() -> Self {
        Self::new()
    }
}
