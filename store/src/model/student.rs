use serde::{Deserialize, Serialize};

use crate::consts::consts::StudentName;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Student {
    pub name: StudentName,
}

impl Student {
    pub fn new(name: StudentName) -> Self {
        Student { name }
    }
}
