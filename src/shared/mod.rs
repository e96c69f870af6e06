pub mod index_status;
pub mod state;
pub mod types;
