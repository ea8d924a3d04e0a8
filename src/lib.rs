pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git_ops;
pub mod rollback;
pub mod runner;
pub mod ui;
pub mod validator;

pub use error::{GateError, Result};
