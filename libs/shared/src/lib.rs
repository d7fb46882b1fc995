pub mod local_store;
pub mod models;
