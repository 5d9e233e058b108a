//! Core data models for maestro-cli
//!
//! This module contains the data structures that represent the scheduling
//! domain: calendar dates, schedule entries, and their annotations.

pub mod contact;
pub mod date;
pub mod entry;
pub mod goal;

pub use contact::Contact;
pub use date::EntryDate;
pub use entry::{Entry, EntryKind};
pub use goal::Goal;
