//! Shared panic-message constants.
//!
//! NEAR contracts fail by aborting the transaction, so the protocol's error
//! kinds are surfaced as stable message strings. Keeping them in one place
//! lets both contracts and every test layer assert on the same text.

/// The caller lacks the required role: administrator, owner, registered
/// provider, or configured oracle, depending on the operation.
pub const ERR_UNAUTHORIZED: &str = "Unauthorized";

/// The submitted request ID is not in the pending table. Covers requests that
/// never existed, were already fulfilled, or were cancelled.
pub const ERR_UNKNOWN_REQUEST: &str = "Unknown request";

/// The consumer has no oracle reference configured.
pub const ERR_NOT_CONFIGURED: &str = "Oracle address not configured";
