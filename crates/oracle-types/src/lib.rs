//! Shared types and interfaces for the fight-winner oracle.
//!
//! This crate provides the common type definitions, traits, events, and error
//! messages used across the oracle ecosystem. It enables type-safe
//! interactions between the oracle contract and consumer contracts.
//!
//! # Modules
//!
//! - [`events`] - NEP-297 compliant event definitions for indexing
//! - [`interfaces`] - Trait definitions for the oracle and consumer contracts
//! - [`types`] - Core type aliases and definitions
//! - [`errors`] - Shared panic-message constants

pub mod errors;
pub mod events;
pub mod interfaces;
pub mod types;
