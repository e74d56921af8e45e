//! Integration tests against a live, bootstrapped schema.

pub mod concurrency;
pub mod governance;
pub mod round_trip;
