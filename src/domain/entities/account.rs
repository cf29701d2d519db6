//! Domain entity representing a bank-style account.

use chrono::{DateTime, SubsecRound, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) for randomly generated account numbers.
pub const ACCOUNT_NUMBER_RANGE: i64 = 1_000_000_000;

/// A persisted account.
///
/// `id` is assigned by storage and never changes afterwards. Neither `number`
/// uniqueness nor a non-negative `balance` is enforced; `balance` is kept in
/// minor currency units.
///
/// The serialized form is the public wire format and is also embedded in
/// issued credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub number: i64,
    pub balance: i64,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Attaches a storage-assigned identifier to a freshly constructed account.
    pub fn from_new(id: i64, new_account: NewAccount) -> Self {
        Self {
            id,
            first_name: new_account.first_name,
            last_name: new_account.last_name,
            number: new_account.number,
            balance: new_account.balance,
            created_at: new_account.created_at,
        }
    }
}

/// An account that has been constructed in memory but not yet persisted.
///
/// It has no identifier; storage assigns one on
/// [`crate::domain::repositories::AccountRepository::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub number: i64,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    /// Builds a new account with a random number, zero balance and the current
    /// UTC time.
    ///
    /// Names are taken as-is; empty strings are accepted. The timestamp is
    /// truncated to microseconds, the precision PostgreSQL stores.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            number: rand::rng().random_range(0..ACCOUNT_NUMBER_RANGE),
            balance: 0,
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
}
