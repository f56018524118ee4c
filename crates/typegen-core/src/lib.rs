pub mod columns;
pub mod conversion;
pub mod error;
pub mod tables;
pub mod typings;
