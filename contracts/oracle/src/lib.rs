use near_sdk::store::{LookupMap, LookupSet};
use near_sdk::{
    env, near, require, AccountId, Gas, NearToken, PanicOnDefault, Promise,
    json_types::U64,
};

use oracle_types::{
    errors::{ERR_UNAUTHORIZED, ERR_UNKNOWN_REQUEST},
    events::OracleEvent,
    types::{PendingRequest, RequestId},
};

/// Gas for the fulfillment callback on the requester contract.
const GAS_FOR_WINNER_CALLBACK: Gas = Gas::from_tgas(10);

/// FightOracle - Registry of authorized data providers and dispatcher of
/// winner-lookup requests.
///
/// Anyone may ask who won the fight; only providers vetted by the
/// administrator may answer. The request ID is the sole correlation handle
/// across the asynchronous gap between a request and its fulfillment: an
/// off-chain provider watches the `winner_fight_requested` event, resolves
/// the winner, and submits it back through `return_winner_fight`.
#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct FightOracle {
    /// Administrator - curates the provider set, set at construction.
    admin: AccountId,

    /// Accounts authorized to submit fulfillments.
    providers: LookupSet<AccountId>,

    /// Outstanding requests keyed by their ID.
    pending_requests: LookupMap<RequestId, PendingRequest>,

    /// Next ID to allocate. Strictly increasing; IDs are never reused, even
    /// after fulfillment or cancellation.
    next_request_id: RequestId,
}

#[near]
impl FightOracle {
    /// Initialize the oracle contract.
    ///
    /// # Arguments
    /// * `admin` - Account that curates the provider set
    #[init]
    pub fn new(admin: AccountId) -> Self {
        Self {
            admin,
            providers: LookupSet::new(b"p"),
            pending_requests: LookupMap::new(b"r"),
            next_request_id: 0,
        }
    }

    // ==================== Provider Registry ====================

    /// Authorize a data provider to submit fulfillments.
    /// Only the administrator can call this method.
    ///
    /// Membership is a set: re-adding an existing provider changes nothing
    /// and emits nothing.
    pub fn add_provider(&mut self, provider: AccountId) {
        self.assert_admin();

        if self.providers.insert(provider.clone()) {
            OracleEvent::ProviderAdded { provider: &provider }.emit();
        }
    }

    /// Revoke a data provider's authorization.
    /// Only the administrator can call this method.
    pub fn remove_provider(&mut self, provider: AccountId) {
        self.assert_admin();

        if self.providers.remove(&provider) {
            OracleEvent::ProviderRemoved { provider: &provider }.emit();
        }
    }

    /// Check whether an account is an authorized provider.
    pub fn is_provider(&self, account: AccountId) -> bool {
        self.providers.contains(&account)
    }

    // ==================== Request / Fulfillment ====================

    /// Record a winner-lookup request for the calling account.
    ///
    /// Open to any caller: consumers are many and untrusted by default; the
    /// trust boundary sits on who may answer, not on who may ask. The
    /// requester is the predecessor account, so a caller cannot enqueue
    /// callbacks aimed at a third party.
    ///
    /// # Returns
    /// The assigned request ID, for correlating the eventual fulfillment
    pub fn request_winner_fight(&mut self) -> U64 {
        let requester = env::predecessor_account_id();
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        self.pending_requests.insert(
            request_id,
            PendingRequest {
                requester: requester.clone(),
                requested_at_ns: env::block_timestamp(),
            },
        );

        OracleEvent::WinnerFightRequested {
            request_id,
            requester: &requester,
        }
        .emit();

        U64(request_id)
    }

    /// Submit the answer for a pending request.
    /// Only an authorized provider can call this method.
    ///
    /// The fulfillment callback is dispatched to the requester recorded at
    /// request time; `requester` must match that record, so a provider cannot
    /// redirect an answer to an arbitrary recipient. A mismatch is rejected
    /// as an unknown request, since no such (id, requester) pair is pending.
    ///
    /// # Arguments
    /// * `winner` - The winner's name
    /// * `requester` - The account that issued the request
    /// * `request_id` - The request being fulfilled
    pub fn return_winner_fight(&mut self, winner: String, requester: AccountId, request_id: U64) {
        require!(
            self.providers.contains(&env::predecessor_account_id()),
            ERR_UNAUTHORIZED
        );

        let pending = self
            .pending_requests
            .get(&request_id.0)
            .cloned()
            .unwrap_or_else(|| env::panic_str(ERR_UNKNOWN_REQUEST));
        require!(pending.requester == requester, ERR_UNKNOWN_REQUEST);

        self.pending_requests.remove(&request_id.0);

        OracleEvent::WinnerFightReturned {
            request_id: request_id.0,
            winner: &winner,
        }
        .emit();

        let _ = self.call_winner_fight_callback(pending.requester, winner, request_id);
    }

    /// Cancel a pending request.
    /// Only the administrator can call this method.
    ///
    /// Keeps the pending table from growing without bound when requests are
    /// never fulfilled. The cancelled ID is retired, never reallocated.
    pub fn cancel_request(&mut self, request_id: U64) {
        self.assert_admin();

        if self.pending_requests.remove(&request_id.0).is_none() {
            env::panic_str(ERR_UNKNOWN_REQUEST);
        }

        OracleEvent::RequestCancelled {
            request_id: request_id.0,
        }
        .emit();
    }

    // ==================== View Methods ====================

    /// Get the administrator account.
    pub fn get_admin(&self) -> AccountId {
        self.admin.clone()
    }

    /// Look up a pending request by ID.
    ///
    /// Returns `None` for IDs never issued, already fulfilled, or cancelled.
    pub fn get_pending_request(&self, request_id: U64) -> Option<PendingRequest> {
        self.pending_requests.get(&request_id.0).cloned()
    }

    /// The ID the next request will be assigned.
    pub fn next_request_id(&self) -> U64 {
        U64(self.next_request_id)
    }

    // ==================== Internal ====================

    /// Dispatch the fulfillment callback on the requester contract.
    fn call_winner_fight_callback(
        &self,
        requester: AccountId,
        winner: String,
        request_id: U64,
    ) -> Promise {
        Promise::new(requester).function_call(
            "winner_fight_callback".to_string(),
            near_sdk::serde_json::json!({
                "winner": winner,
                "request_id": request_id,
            })
            .to_string()
            .into_bytes(),
            NearToken::from_yoctonear(0),
            GAS_FOR_WINNER_CALLBACK,
        )
    }

    fn assert_admin(&self) {
        require!(env::predecessor_account_id() == self.admin, ERR_UNAUTHORIZED);
    }
}
