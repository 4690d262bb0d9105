//! Library entry for rosterguard components used by binary and tests.

pub mod access;
pub mod config;
pub mod profile;
pub mod roster;
pub mod values;

pub use access::{AccessChecker, Action, Decision, Entity, Severity};
pub use roster::{Privilege, Roster, UserRecord};
