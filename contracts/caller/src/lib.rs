use near_sdk::store::LookupMap;
use near_sdk::{
    env, near, require, AccountId, Gas, NearToken, PanicOnDefault, Promise, PromiseError,
    json_types::U64,
};

use oracle_types::{
    errors::{ERR_NOT_CONFIGURED, ERR_UNAUTHORIZED},
    events::CallerEvent,
    types::RequestId,
};

/// Gas for the request call on the oracle contract.
const GAS_FOR_ORACLE_REQUEST: Gas = Gas::from_tgas(15);

/// Gas for the self-callback that propagates the assigned request ID.
const GAS_FOR_REQUEST_CALLBACK: Gas = Gas::from_tgas(5);

/// A fulfilled answer held by the consumer.
#[near(serializers = [json, borsh])]
#[derive(Clone)]
pub struct ResolvedWinner {
    /// The request this answer resolves.
    pub request_id: U64,
    /// The winner's name.
    pub winner: String,
}

/// Caller - Consumer contract that asks the oracle who won the fight.
///
/// Holds a single owner-controlled reference to the oracle it trusts,
/// forwards winner-lookup requests to it, and receives the answer through
/// `winner_fight_callback`. Answers are kept per request ID, so fulfillments
/// of concurrently pending requests do not overwrite each other; the latest
/// resolved pair is also exposed as a convenience view.
#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Caller {
    /// Contract owner - the only account allowed to retarget the oracle.
    owner: AccountId,

    /// The oracle contract this consumer trusts. Unset until the owner
    /// configures it.
    oracle: Option<AccountId>,

    /// Resolved answers keyed by the oracle-assigned request ID.
    winners: LookupMap<RequestId, String>,

    /// The most recently resolved answer.
    last_winner: Option<ResolvedWinner>,
}

#[near]
impl Caller {
    /// Initialize the contract.
    ///
    /// # Arguments
    /// * `owner` - Account allowed to configure the oracle reference
    #[init]
    pub fn new(owner: AccountId) -> Self {
        Self {
            owner,
            oracle: None,
            winners: LookupMap::new(b"w"),
            last_winner: None,
        }
    }

    // ==================== Configuration ====================

    /// Set the oracle this consumer trusts.
    /// Only the owner can call this method.
    ///
    /// Overwrites any previous reference unconditionally; the target is not
    /// probed for liveness. Subsequent requests go to the new oracle, and
    /// only the new oracle may deliver callbacks.
    pub fn set_oracle_address(&mut self, oracle: AccountId) {
        self.assert_owner();

        self.oracle = Some(oracle.clone());

        CallerEvent::OracleAddressChanged { oracle: &oracle }.emit();
    }

    // ==================== Request / Fulfillment ====================

    /// Ask the configured oracle who won the fight.
    ///
    /// Forwards to the oracle's `request_winner_fight` and re-emits the
    /// `winner_fight_requested` event from this contract once the assigned
    /// request ID comes back, so observers watching only the consumer can
    /// still correlate the eventual fulfillment.
    pub fn get_winner_fight(&mut self) -> Promise {
        let oracle = self
            .oracle
            .clone()
            .unwrap_or_else(|| env::panic_str(ERR_NOT_CONFIGURED));

        Promise::new(oracle)
            .function_call(
                "request_winner_fight".to_string(),
                near_sdk::serde_json::json!({}).to_string().into_bytes(),
                NearToken::from_yoctonear(0),
                GAS_FOR_ORACLE_REQUEST,
            )
            .then(Promise::new(env::current_account_id()).function_call(
                "on_winner_fight_requested".to_string(),
                near_sdk::serde_json::json!({}).to_string().into_bytes(),
                NearToken::from_yoctonear(0),
                GAS_FOR_REQUEST_CALLBACK,
            ))
    }

    /// Callback after the oracle assigns a request ID.
    /// Propagates the request event and surfaces the ID to the caller.
    #[private]
    pub fn on_winner_fight_requested(
        &mut self,
        #[callback_result] request_id: Result<U64, PromiseError>,
    ) -> U64 {
        match request_id {
            Ok(request_id) => {
                CallerEvent::WinnerFightRequested {
                    request_id: request_id.0,
                    requester: &env::current_account_id(),
                }
                .emit();

                request_id
            }
            Err(_) => env::panic_str("Oracle request failed"),
        }
    }

    /// Fulfillment callback invoked by the oracle when a provider's answer
    /// to one of this contract's requests has been accepted.
    ///
    /// Only the currently configured oracle may deliver answers; anyone else
    /// is rejected, including an oracle this contract previously trusted.
    pub fn winner_fight_callback(&mut self, winner: String, request_id: U64) {
        let oracle = self
            .oracle
            .clone()
            .unwrap_or_else(|| env::panic_str(ERR_UNAUTHORIZED));
        require!(env::predecessor_account_id() == oracle, ERR_UNAUTHORIZED);

        self.winners.insert(request_id.0, winner.clone());
        self.last_winner = Some(ResolvedWinner {
            request_id,
            winner: winner.clone(),
        });

        env::log_str(&format!(
            "Fight winner request {} resolved: {}",
            request_id.0, winner
        ));
    }

    // ==================== View Methods ====================

    /// Get the contract owner.
    pub fn get_owner(&self) -> AccountId {
        self.owner.clone()
    }

    /// Get the currently configured oracle, if any.
    pub fn get_oracle_address(&self) -> Option<AccountId> {
        self.oracle.clone()
    }

    /// Look up the resolved winner for a specific request.
    pub fn get_winner(&self, request_id: U64) -> Option<String> {
        self.winners.get(&request_id.0).cloned()
    }

    /// Get the most recently resolved answer.
    pub fn get_last_winner(&self) -> Option<ResolvedWinner> {
        self.last_winner.clone()
    }

    // ==================== Internal ====================

    fn assert_owner(&self) {
        require!(env::predecessor_account_id() == self.owner, ERR_UNAUTHORIZED);
    }
}
