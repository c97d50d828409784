//! Terminal dashboard that drives the API the way the form-based front end
//! does: one prediction form, one running chat transcript.

pub mod client;
pub mod command;
pub mod session;
