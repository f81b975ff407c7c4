//! Users domain model

pub mod entities;
pub mod password;
