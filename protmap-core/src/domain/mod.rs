//! Core domain types
//!
//! This module contains the domain structures shared between the mapping
//! client and the CLI. They model the lifecycle of one remote mapping job
//! independent of any wire format.

pub mod job;
pub mod mapping;
