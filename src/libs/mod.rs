//! Core library modules for the tally application.
//!
//! - **Parsing**: [`timesheet`] holds the line classifier, parsers, assembler and validator
//! - **Data**: [`task`], [`summary`]
//! - **Presentation**: [`formatter`], [`view`], [`export`]
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`]

pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod summary;
pub mod task;
pub mod timesheet;
pub mod view;
