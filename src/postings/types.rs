//! Input data: a posting moves an amount from one account to another.

use serde::{Deserialize, Serialize};

/// Account standing for everything outside the ledger.
pub const WORLD: &str = "world";

/// One money movement between two accounts.
///
/// Account addresses are stored without the leading `@`. `amount` keeps
/// the ledger's encoded form, e.g. `"USD/2 10000"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub amount: String,
    pub source: String,
    pub destination: String,
}

impl Posting {
    /// Build a posting. A leading `@` on either address is dropped.
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            source: strip_sigil(source.into()),
            destination: strip_sigil(destination.into()),
        }
    }
}

/// Display label for an account address.
pub fn account_label(account: &str) -> String {
    format!("@{account}")
}

pub(crate) fn strip_sigil(address: String) -> String {
    match address.strip_prefix('@') {
        Some(rest) => rest.to_string(),
        None => address,
    }
}
