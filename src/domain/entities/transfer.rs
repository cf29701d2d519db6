//! Transfer instruction between two accounts.

/// A request to move `amount` from one account to another.
///
/// Transfers are accepted but never applied to balances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub from_account: i64,
    pub to_account: i64,
    pub amount: i64,
}

/// Result of submitting a [`Transfer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// The instruction was accepted but no balance was changed.
    NotApplied(Transfer),
}
