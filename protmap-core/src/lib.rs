//! Protmap Core
//!
//! Core types for the protmap accession-mapping tools.
//!
//! This crate contains:
//! - Domain types: mapping requests, job handles, job states
//! - DTOs: wire-level response shapes of the ID-mapping service

pub mod domain;
pub mod dto;
