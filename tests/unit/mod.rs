//! Unit tests per library area

pub mod align;
pub mod chart;
pub mod extract;
pub mod reports;
pub mod session;
