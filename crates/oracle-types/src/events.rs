//! Oracle event definitions following the NEP-297 standard.
//!
//! This module defines all events emitted by the fight-winner oracle and its
//! consumer contract. Events are logged in JSON format and can be indexed by
//! off-chain services; data providers watch `winner_fight_requested` to learn
//! which requests await fulfillment.
//!
//! Reference: https://nomicon.io/Standards/EventsFormat

use near_sdk::{
    AccountId, log,
    serde::Serialize,
    serde_json::json,
};

use crate::types::RequestId;

/// Event standard identifier for oracle-side events.
const ORACLE_EVENT_STANDARD: &str = "fight-oracle";

/// Event standard identifier for consumer-side events.
const CALLER_EVENT_STANDARD: &str = "fight-caller";

/// Current version of the event standard.
const EVENT_STANDARD_VERSION: &str = "1.0.0";

/// All events emitted by the oracle contract.
///
/// Each variant represents a distinct event type with its associated data.
/// Events are serialized to JSON with snake_case field names and emitted only
/// after the state change they describe has committed.
#[derive(Clone, Serialize)]
#[serde(crate = "near_sdk::serde")]
#[serde(tag = "event", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum OracleEvent<'a> {
    /// Emitted when the administrator authorizes a new data provider.
    ///
    /// Only emitted on first insertion; re-adding an already-authorized
    /// provider changes nothing and logs nothing.
    ProviderAdded {
        /// The newly authorized provider account.
        provider: &'a AccountId,
    },

    /// Emitted when the administrator revokes a data provider.
    ProviderRemoved {
        /// The provider whose authorization was revoked.
        provider: &'a AccountId,
    },

    /// Emitted when a new winner-lookup request is recorded.
    ///
    /// Off-chain providers watch this event, resolve the fight winner, and
    /// submit the answer through `return_winner_fight`.
    WinnerFightRequested {
        /// Oracle-assigned correlation ID for this request.
        request_id: RequestId,
        /// Account that will receive the fulfillment callback.
        requester: &'a AccountId,
    },

    /// Emitted when an authorized provider's fulfillment is accepted and
    /// dispatched to the requester.
    WinnerFightReturned {
        /// The request being fulfilled.
        request_id: RequestId,
        /// The winner's name as reported by the provider.
        winner: &'a str,
    },

    /// Emitted when the administrator cancels a pending request.
    RequestCancelled {
        /// The cancelled request. The ID is retired, never reallocated.
        request_id: RequestId,
    },
}

impl OracleEvent<'_> {
    /// Emit this event to the NEAR logs.
    ///
    /// The event is formatted as JSON following NEP-297 and prefixed with
    /// "EVENT_JSON:".
    pub fn emit(&self) {
        emit_event(ORACLE_EVENT_STANDARD, &self);
    }
}

/// All events emitted by the consumer (Caller) contract.
#[derive(Clone, Serialize)]
#[serde(crate = "near_sdk::serde")]
#[serde(tag = "event", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum CallerEvent<'a> {
    /// Emitted when the owner retargets the trusted oracle reference.
    OracleAddressChanged {
        /// The new oracle contract account.
        oracle: &'a AccountId,
    },

    /// Propagation of the oracle's `winner_fight_requested` event, re-emitted
    /// by the consumer so observers watching only the consumer can still
    /// correlate the request ID.
    WinnerFightRequested {
        /// Oracle-assigned correlation ID for this request.
        request_id: RequestId,
        /// The consumer contract that issued the request.
        requester: &'a AccountId,
    },
}

impl CallerEvent<'_> {
    /// Emit this event to the NEAR logs.
    pub fn emit(&self) {
        emit_event(CALLER_EVENT_STANDARD, &self);
    }
}

/// Formats and logs an event following the NEP-297 standard.
///
/// NEP-297 defines a standard format for indexable events on NEAR:
/// - `standard`: Name of the event standard (e.g., "fight-oracle")
/// - `version`: Version of the standard (e.g., "1.0.0")
/// - `event`: Event type name (e.g., "winner_fight_requested")
/// - `data`: Array of event data objects
///
/// The output is logged with the "EVENT_JSON:" prefix for indexer detection.
fn emit_event<T: ?Sized + Serialize>(standard: &str, data: &T) {
    let result = json!(data);
    let event_json = json!({
        "standard": standard,
        "version": EVENT_STANDARD_VERSION,
        "event": result["event"],
        "data": [result["data"]]
    })
    .to_string();
    log!("{}", format!("EVENT_JSON:{}", event_json));
}
