//! Two small record-management HTTP services sharing one binary.
//!
//! - The **directory** service keeps employee records in a schemaless
//!   document store and departments in an in-memory registry that resets
//!   on restart.
//! - The **catalog** service keeps books and reviews in SQLite, simulates
//!   a confirmation email with a detached delayed log task, and exposes a
//!   self-test endpoint that drives its own HTTP surface end-to-end.

pub mod api;
pub mod db;
pub mod models;
pub mod notify;
pub mod registry;
pub mod selftest;
