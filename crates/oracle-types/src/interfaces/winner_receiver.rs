//! Callback interface for contracts that consume oracle answers.
//!
//! Contracts that issue requests through `request_winner_fight` receive the
//! answer through this callback once an authorized provider fulfills the
//! request.

use near_sdk::json_types::U64;

/// Interface for contracts that receive fulfillment callbacks from the
/// oracle.
///
/// The oracle invokes this method on the requester recorded at request time.
/// Implementations must reject callers other than their configured oracle.
pub trait WinnerFightReceiver {
    /// Called when a provider's answer to one of this contract's requests has
    /// been accepted by the oracle.
    ///
    /// # Arguments
    ///
    /// * `winner` - The winner's name as reported by the provider
    /// * `request_id` - The request this answer resolves
    fn winner_fight_callback(&mut self, winner: String, request_id: U64);
}
