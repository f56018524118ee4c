pub mod error;
pub mod settings;
