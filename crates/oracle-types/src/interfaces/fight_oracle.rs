//! The oracle contract's public interface.

use near_sdk::json_types::U64;
use near_sdk::AccountId;

use crate::types::PendingRequest;

/// The fight-winner oracle registry and dispatcher.
///
/// The oracle owns the set of authorized data providers and the table of
/// in-flight requests. Anyone may ask; only authorized providers may answer.
pub trait FightOracle {
    /// Authorize a data provider to submit fulfillments.
    ///
    /// Restricted to the administrator. Idempotent: re-adding an existing
    /// provider changes nothing.
    fn add_provider(&mut self, provider: AccountId);

    /// Revoke a data provider's authorization.
    ///
    /// Restricted to the administrator. Removing an unknown provider is a
    /// no-op.
    fn remove_provider(&mut self, provider: AccountId);

    /// Record a winner-lookup request for the calling account.
    ///
    /// Open to any caller. Allocates the next request ID and emits
    /// `winner_fight_requested` so off-chain providers can pick the request
    /// up.
    ///
    /// # Returns
    ///
    /// The assigned request ID, for correlating the eventual fulfillment.
    fn request_winner_fight(&mut self) -> U64;

    /// Submit the answer for a pending request.
    ///
    /// Restricted to authorized providers. The fulfillment callback is
    /// dispatched to the requester recorded at request time; `requester` must
    /// match that record, so a provider cannot redirect an answer to an
    /// arbitrary recipient.
    ///
    /// # Arguments
    ///
    /// * `winner` - The winner's name
    /// * `requester` - The account that issued the request
    /// * `request_id` - The request being fulfilled
    fn return_winner_fight(&mut self, winner: String, requester: AccountId, request_id: U64);

    /// Cancel a pending request.
    ///
    /// Restricted to the administrator. The ID is retired and never
    /// reallocated.
    fn cancel_request(&mut self, request_id: U64);

    /// Check whether an account is an authorized provider.
    fn is_provider(&self, account: AccountId) -> bool;

    /// Look up a pending request by ID.
    ///
    /// Returns `None` for IDs that were never issued, already fulfilled, or
    /// cancelled.
    fn get_pending_request(&self, request_id: U64) -> Option<PendingRequest>;
}
