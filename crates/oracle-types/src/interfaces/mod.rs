//! Interface definitions for the fight-winner oracle.
//!
//! This module contains trait definitions that describe the contract
//! interfaces of the oracle ecosystem.

pub mod fight_oracle;
pub mod winner_receiver;

pub use fight_oracle::*;
pub use winner_receiver::*;
