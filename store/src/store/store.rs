use std::sync::mpsc::Receiver;

use crate::model::statement::{Statement, StatementResult};

use super::{
    request_manager::{StoreRequest, StoreRequestAction, StoreResponseAction},
    table::{roster::RosterTable, students::StudentTable, ApplyErrors},
};

/// Single owner of all mutable state. Runs on its own thread and processes
/// statements one at a time off the request channel, which gives every
/// caller a defined ordering without any locks.
pub struct Store {
    roster: RosterTable,
    students: StudentTable,
    store_receiver: Receiver<StoreRequest>,
}

impl Store {
    pub fn new(store_receiver: Receiver<StoreRequest>) -> Self {
        Self {
            roster: RosterTable::new(),
            students: StudentTable::new(),
            store_receiver,
        }
    }

    pub fn new_test() -> Self {
        let (_, store_receiver) = std::sync::mpsc::channel();

        Self::new(store_receiver)
    }

    pub fn run(&mut self) {
        log::info!("📒 Store running [SeedRoster: {}]", self.roster.len());

        loop {
            let StoreRequest {
                action,
                response_sender,
            } = match self.store_receiver.recv() {
                Ok(request) => request,
                // All request managers have been dropped, nothing left to serve
                Err(_) => return,
            };

            log::info!("Received request: {}", action.log_format());

            let statement = match action {
                StoreRequestAction::Statement(statement) => statement,
                StoreRequestAction::Shutdown => {
                    let _ = response_sender.send(StoreResponseAction::Response(
                        StatementResult::SuccessStatus("Successfully shutdown store".to_string()),
                    ));

                    return;
                }
            };

            let response = self.process_statement(statement);

            // Sends the response data back to the caller of the request, i.e.
            // the entity on the other end of the channel
            response_sender
                .send(response)
                .expect("Should always be able to send a response back to the caller")
        }
    }

    pub fn process_statement(&mut self, statement: Statement) -> StoreResponseAction {
        match self.apply(statement) {
            Ok(result) => StoreResponseAction::Response(result),
            Err(err) => StoreResponseAction::StatementError(format!("{}", err)),
        }
    }

    fn apply(&mut self, statement: Statement) -> Result<StatementResult, ApplyErrors> {
        let result = match statement {
            Statement::RecordVisit(visitor) => {
                StatementResult::Roster(self.roster.record_visit(visitor))
            }
            Statement::ListStudents => StatementResult::Students(self.students.list()),
            Statement::AddStudents(names) => {
                self.students.insert_many(names)?;

                StatementResult::Students(self.students.list())
            }
            Statement::RemoveStudents(names) => {
                let removed = self.students.remove_many(&names);

                log::info!("Removed {} student row(s)", removed);

                StatementResult::Students(self.students.list())
            }
        };

        Ok(result)
    }
}
