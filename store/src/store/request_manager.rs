use std::{sync::mpsc::Sender, time::Duration};

use thiserror::Error;

use crate::{
    consts::consts::StudentName,
    model::{
        headers::HeaderBag,
        person::RosterEntry,
        statement::{Statement, StatementResult},
        student::Student,
    },
};

const RESPONSE_TIMEOUT: Duration = Duration::from_secs(2);

pub enum StoreRequestAction {
    Statement(Statement),
    Shutdown,
}

impl StoreRequestAction {
    pub fn log_format(&self) -> String {
        match self {
            StoreRequestAction::Statement(statement) => statement.log_format(),
            StoreRequestAction::Shutdown => "Shutdown".to_string(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum StoreResponseAction {
    Response(StatementResult),
    StatementError(String),
}

impl StoreResponseAction {
    pub fn into_result(self) -> Result<StatementResult, RequestManagerError> {
        match self {
            StoreResponseAction::Response(result) => Ok(result),
            StoreResponseAction::StatementError(err) => {
                Err(RequestManagerError::StatementFailed(err))
            }
        }
    }
}

pub struct StoreRequest {
    pub response_sender: oneshot::Sender<StoreResponseAction>,
    pub action: StoreRequestAction,
}

#[derive(Error, Debug)]
pub enum RequestManagerError {
    #[error("Store took too long to respond to request")]
    StoreTimeout,
    #[error("Store exited before responding")]
    StoreDisconnected,
    #[error("Statement failed: {0}")]
    StatementFailed(String),
}

/// Caller-side handle to the store thread. Each request pairs a statement
/// with a oneshot response channel; the typed methods below keep the
/// statement-to-result mapping in one place.
#[derive(Clone)]
pub struct RequestManager {
    store_sender: Sender<StoreRequest>,
}

impl RequestManager {
    pub fn new(store_sender: Sender<StoreRequest>) -> Self {
        Self { store_sender }
    }

    pub fn send_record_visit(
        &self,
        visitor: HeaderBag,
    ) -> Result<Vec<RosterEntry>, RequestManagerError> {
        let result = self.send_single_statement(Statement::RecordVisit(visitor))?;

        Ok(result.roster())
    }

    pub fn send_list_students(&self) -> Result<Vec<Student>, RequestManagerError> {
        let result = self.send_single_statement(Statement::ListStudents)?;

        Ok(result.students())
    }

    pub fn send_add_students(
        &self,
        names: Vec<StudentName>,
    ) -> Result<Vec<Student>, RequestManagerError> {
        let result = self.send_single_statement(Statement::AddStudents(names))?;

        Ok(result.students())
    }

    pub fn send_remove_students(
        &self,
        names: Vec<StudentName>,
    ) -> Result<Vec<Student>, RequestManagerError> {
        let result = self.send_single_statement(Statement::RemoveStudents(names))?;

        Ok(result.students())
    }

    /// Sends a shutdown request to the store and returns the store's response
    pub fn send_shutdown_request(&self) -> Result<String, RequestManagerError> {
        let result = self.send_store_request(StoreRequestAction::Shutdown)?;

        Ok(result.success_status())
    }

    pub fn send_single_statement(
        &self,
        statement: Statement,
    ) -> Result<StatementResult, RequestManagerError> {
        self.send_store_request(StoreRequestAction::Statement(statement))
    }

    fn send_store_request(
        &self,
        action: StoreRequestAction,
    ) -> Result<StatementResult, RequestManagerError> {
        let (response_sender, response_receiver) = oneshot::channel::<StoreResponseAction>();

        let request = StoreRequest {
            response_sender,
            action,
        };

        // Sends the request to the store thread, the store will respond on
        // the response_receiver once it has processed the statement
        self.store_sender
            .send(request)
            .map_err(|_| RequestManagerError::StoreDisconnected)?;

        match response_receiver.recv_timeout(RESPONSE_TIMEOUT) {
            Ok(response) => response.into_result(),
            Err(oneshot::RecvTimeoutError::Timeout) => Err(RequestManagerError::StoreTimeout),
            Err(oneshot::RecvTimeoutError::Disconnected) => {
                Err(RequestManagerError::StoreDisconnected)
            }
        }
    }
}
