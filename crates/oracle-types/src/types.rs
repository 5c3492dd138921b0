//! Core type definitions for the fight-winner oracle.

use near_sdk::{near, AccountId};

/// Unique correlation handle linking an issued request to its eventual
/// fulfillment.
///
/// IDs are assigned solely by the oracle contract, start at 0, increase by 1
/// per request, and are never reused for the lifetime of the instance.
pub type RequestId = u64;

/// An outstanding winner-lookup request recorded by the oracle.
///
/// Entries exist only while the request is unresolved; fulfillment or an
/// administrator cancel removes them.
#[near(serializers = [json, borsh])]
#[derive(Clone)]
pub struct PendingRequest {
    /// Account to receive the fulfillment callback.
    pub requester: AccountId,

    /// Timestamp (in nanoseconds) when the request was issued.
    pub requested_at_ns: u64,
}
