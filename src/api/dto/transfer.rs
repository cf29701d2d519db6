//! DTOs for the transfer endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Transfer;

/// Body of `/account/transfer`, echoed back unchanged.
///
/// The source account is read from `fromAccount`; the historical
/// `fr1omAccount` key is still accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    #[serde(alias = "fr1omAccount")]
    pub from_account: i64,
    pub to_account: i64,
    pub amount: i64,
}

impl From<TransferRequest> for Transfer {
    fn from(req: TransferRequest) -> Self {
        Transfer {
            from_account: req.from_account,
            to_account: req.to_account,
            amount: req.amount,
        }
    }
}

impl From<Transfer> for TransferRequest {
    fn from(transfer: Transfer) -> Self {
        TransferRequest {
            from_account: transfer.from_account,
            to_account: transfer.to_account,
            amount: transfer.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_legacy_source_key() {
        let req: TransferRequest = serde_json::from_value(json!({
            "fr1omAccount": 1,
            "toAccount": 2,
            "amount": 300
        }))
        .unwrap();

        assert_eq!(req.from_account, 1);
    }

    #[test]
    fn test_serializes_corrected_source_key() {
        let value = serde_json::to_value(TransferRequest {
            from_account: 1,
            to_account: 2,
            amount: 300,
        })
        .unwrap();

        assert_eq!(value, json!({"fromAccount": 1, "toAccount": 2, "amount": 300}));
    }
}
