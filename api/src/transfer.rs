//! The send form's demo-only transfer simulation.

use serde::Deserialize;
use serde::Serialize;

use crate::error::TransferError;
#[cfg(not(target_arch = "wasm32"))]
use crate::model::Transaction;

/// What the user typed into the send form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub to: String,
    /// Whole tokens as typed, e.g. "12.5".
    pub amount: String,
    pub denom: String,
}

impl Default for TransferRequest {
    fn default() -> Self {
        Self {
            to: String::new(),
            amount: String::new(),
            denom: "ucmint".to_string(),
        }
    }
}

impl TransferRequest {
    pub fn validate(&self) -> Result<(), TransferError> {
        if self.to.trim().is_empty() {
            return Err(TransferError::MissingRecipient);
        }
        let amount = self.amount.trim();
        let is_decimal = !amount.is_empty()
            && amount.chars().all(|c| c.is_ascii_digit() || c == '.')
            && amount.matches('.').count() <= 1;
        let is_positive = amount.chars().any(|c| matches!(c, '1'..='9'));
        if !(is_decimal && is_positive) {
            return Err(TransferError::InvalidAmount);
        }
        Ok(())
    }
}

/// Records a simulated transfer on top of `latest_height`.
///
/// Nothing is submitted anywhere. Outside demo mode the request is refused.
#[cfg(not(target_arch = "wasm32"))]
pub fn record_demo_transfer(
    request: &TransferRequest,
    latest_height: Option<u64>,
    demo_mode: bool,
) -> Result<Transaction, TransferError> {
    use chrono::SecondsFormat;
    use chrono::Utc;

    use crate::fixtures::DEMO_CHAIN_HEIGHT;
    use crate::model::TxStatus;

    if !demo_mode {
        return Err(TransferError::LiveModeDisabled);
    }
    request.validate()?;

    let id = uuid::Uuid::new_v4().simple().to_string();
    Ok(Transaction {
        hash: format!("DEMO{}", id[..8].to_uppercase()),
        height: latest_height
            .unwrap_or(DEMO_CHAIN_HEIGHT)
            .saturating_add(1),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        status: TxStatus::Success,
        success: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(to: &str, amount: &str) -> TransferRequest {
        TransferRequest {
            to: to.to_string(),
            amount: amount.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn validation() {
        assert_eq!(request("ciphermint1x", "12.5").validate(), Ok(()));
        assert_eq!(request("ciphermint1x", "0.000001").validate(), Ok(()));
        assert_eq!(
            request("  ", "1").validate(),
            Err(TransferError::MissingRecipient)
        );
        for bad in ["", "0", "0.00", "-1", "1.2.3", "abc", "."] {
            assert_eq!(
                request("ciphermint1x", bad).validate(),
                Err(TransferError::InvalidAmount),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn live_mode_refuses() {
        let err = record_demo_transfer(&request("ciphermint1x", "1"), None, false).unwrap_err();
        assert_eq!(err, TransferError::LiveModeDisabled);
        assert_eq!(
            err.to_string(),
            "Live transfers will be enabled on mainnet launch."
        );
    }

    #[test]
    fn demo_transfer_builds_on_latest_height() {
        let tx = record_demo_transfer(&request("ciphermint1x", "1"), Some(100), true).unwrap();
        assert_eq!(tx.height, 101);
        assert!(tx.success);
        assert!(tx.status.is_success());
        assert!(tx.hash.starts_with("DEMO"));
        assert_eq!(tx.hash.len(), 12);
        assert!(tx.hash[4..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));

        let tx = record_demo_transfer(&request("ciphermint1x", "1"), None, true).unwrap();
        assert_eq!(tx.height, 18236);
    }

    #[test]
    fn height_at_the_top_of_the_range_does_not_overflow() {
        let tx = record_demo_transfer(&request("ciphermint1x", "1"), Some(u64::MAX), true).unwrap();
        assert_eq!(tx.height, u64::MAX);
    }
}
