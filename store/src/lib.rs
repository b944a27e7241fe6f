pub mod consts;
pub mod model;
pub mod store;
