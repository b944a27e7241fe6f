use serde::{Deserialize, Serialize};

use crate::model::headers::HeaderBag;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub name: String,
    pub skill: String,
}

impl Person {
    pub fn new(name: impl Into<String>, skill: impl Into<String>) -> Self {
        Person {
            name: name.into(),
            skill: skill.into(),
        }
    }

    /// The four fixed records the roster is seeded with at process start
    pub fn seed_roster() -> Vec<Person> {
        vec![
            Person::new("Eleven", "telekinesis"),
            Person::new("Steve", "spiky bat"),
            Person::new("Joyce", "grit"),
            Person::new("Mr. Clark", "science"),
        ]
    }

}

/// A roster row is either a seeded person or the header bag a past
/// `GET /people` caller left behind.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum RosterEntry {
    Person(Person),
    Visit(HeaderBag),
}

impl RosterEntry {
    pub fn is_visit(&self) -> bool {
        matches!(self, RosterEntry::Visit(_))
    }
}
