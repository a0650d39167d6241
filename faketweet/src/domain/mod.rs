//! Domain layer
//!
//! - `entities`: tweets, search responses and their partial descriptions
//! - `ports`: trait definitions for external collaborators

pub mod entities;
pub mod ports;
