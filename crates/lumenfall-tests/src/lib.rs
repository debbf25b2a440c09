//! Shared fixtures for the Lumenfall end-to-end test suites.

pub mod fixtures;
