//! Integration tests for medscan crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between different medscan crates.
