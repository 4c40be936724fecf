use thiserror::Error;

/// The data operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Operation {
    #[strum(to_string = "chain status")]
    ChainStatus,
    #[strum(to_string = "balances")]
    Balances,
    #[strum(to_string = "transactions")]
    Transactions,
}

/// A failed fetch. Every cause collapses to one message per operation.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The API answered with a non-success status.
    #[error("Failed to fetch {operation} from API")]
    Status {
        operation: Operation,
        status: u16,
    },
    /// The request never produced a usable response.
    #[error("Failed to fetch {operation} from API")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },
    /// The configured base URL cannot address the endpoint.
    #[error("Failed to fetch {operation} from API")]
    InvalidBaseUrl {
        operation: Operation,
        base_url: String,
    },
}

/// A demo transfer that could not be recorded.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TransferError {
    #[error("Live transfers will be enabled on mainnet launch.")]
    LiveModeDisabled,
    #[error("Enter a recipient address.")]
    MissingRecipient,
    #[error("Enter an amount greater than zero.")]
    InvalidAmount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_operation() {
        let err = FetchError::Status {
            operation: Operation::ChainStatus,
            status: 500,
        };
        assert_eq!(err.to_string(), "Failed to fetch chain status from API");

        let err = FetchError::Status {
            operation: Operation::Transactions,
            status: 404,
        };
        assert_eq!(err.to_string(), "Failed to fetch transactions from API");
    }
}
