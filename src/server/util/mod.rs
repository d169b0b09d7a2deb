//! Small stateless helpers used across services.

pub mod file;
pub mod password;
pub mod token;
