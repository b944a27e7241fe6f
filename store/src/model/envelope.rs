use serde::{Deserialize, Serialize};

use crate::model::headers::HeaderBag;

/// Wire envelope every edge-service route responds with. Keeps payload rows
/// and the caller's own header mapping in separate fields rather than
/// overloading the array's last slot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Envelope<T> {
    pub data: Vec<T>,
    #[serde(rename = "requestHeaders")]
    pub request_headers: HeaderBag,
}

impl<T> Envelope<T> {
    pub fn new(data: Vec<T>, request_headers: HeaderBag) -> Self {
        Envelope {
            data,
            request_headers,
        }
    }
}
