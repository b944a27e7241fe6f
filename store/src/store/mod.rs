pub mod request_manager;
pub mod store;
pub mod table;
