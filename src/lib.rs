//! TrainHub - Training session management backend.
//!
//! This crate implements the session enrollment and registration
//! lifecycle: eligibility-gated enrollment, coordinator approval,
//! role-based authorization, and the derived dashboard aggregates.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
