#![deny(warnings)]
//! End-to-end integration tests across the numbers and letters crates.
