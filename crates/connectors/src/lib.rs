pub mod error;
pub mod factory;
pub mod handle;
pub mod sql;
