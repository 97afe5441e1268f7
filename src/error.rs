use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::config::ConfigError;

/// Conditions that reject a transfer or a balance mutation.
/// These are business rule violations, returned by value and never retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransferError {
    #[error("For transfer funds, {param_name} must be between 1 and 10000 (actual value: {amount})")]
    AmountOutOfRange {
        amount: Decimal,
        param_name: &'static str,
    },

    #[error("You have supplied no value for 'accountFrom'")]
    NullSourceAccount { cause: &'static str },

    #[error("You have supplied no value for 'accountTo'")]
    NullDestinationAccount { cause: &'static str },

    #[error("Insufficient balance at the source account. Balance: {current_balance}.")]
    InsufficientFunds { current_balance: Decimal },

    #[error("Invalid amount. Balance must not be negative. You tried to set {attempted_value}.")]
    InvalidAmount { attempted_value: Decimal },

    #[error("{message}")]
    Unclassified { message: String },
}

/// Stable name of each condition, used in console output and log records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionKind {
    AmountOutOfRange,
    NullSourceAccount,
    NullDestinationAccount,
    InsufficientFunds,
    InvalidAmount,
    Unclassified,
}

impl ConditionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionKind::AmountOutOfRange => "AmountOutOfRange",
            ConditionKind::NullSourceAccount => "NullSourceAccount",
            ConditionKind::NullDestinationAccount => "NullDestinationAccount",
            ConditionKind::InsufficientFunds => "InsufficientFunds",
            ConditionKind::InvalidAmount => "InvalidAmount",
            ConditionKind::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TransferError {
    pub fn amount_out_of_range(amount: Decimal) -> Self {
        Self::AmountOutOfRange {
            amount,
            param_name: "amount",
        }
    }

    pub fn unclassified(message: impl Into<String>) -> Self {
        Self::Unclassified {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ConditionKind {
        match self {
            Self::AmountOutOfRange { .. } => ConditionKind::AmountOutOfRange,
            Self::NullSourceAccount { .. } => ConditionKind::NullSourceAccount,
            Self::NullDestinationAccount { .. } => ConditionKind::NullDestinationAccount,
            Self::InsufficientFunds { .. } => ConditionKind::InsufficientFunds,
            Self::InvalidAmount { .. } => ConditionKind::InvalidAmount,
            Self::Unclassified { .. } => ConditionKind::Unclassified,
        }
    }

    /// Check if the condition was caused by a bad argument to the operation.
    /// Everything except `Unclassified` belongs to this family.
    pub fn is_argument_error(&self) -> bool {
        !matches!(self, Self::Unclassified { .. })
    }
}

/// Errors from writing a condition to an error sink
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("failed to write error log '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// System-level errors of the scenario driver (console I/O, configuration).
/// Transfer conditions are not errors at this level: the driver handles them.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid scenario setup: {0}")]
    Setup(TransferError),
}

pub type Result<T> = std::result::Result<T, DriverError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_out_of_range_message() {
        let err = TransferError::amount_out_of_range(dec!(12000));

        assert_eq!(err.kind(), ConditionKind::AmountOutOfRange);
        assert!(err.is_argument_error());
        assert!(err.to_string().contains("between 1 and 10000"));
        assert!(err.to_string().contains("12000"));
    }

    #[test]
    fn test_insufficient_funds_carries_balance() {
        let err = TransferError::InsufficientFunds {
            current_balance: dec!(250.75),
        };

        assert_eq!(err.kind().as_str(), "InsufficientFunds");
        assert!(err.to_string().contains("250.75"));
    }

    #[test]
    fn test_unclassified_is_not_argument_error() {
        let err = TransferError::unclassified("balance overflow");

        assert_eq!(err.kind(), ConditionKind::Unclassified);
        assert!(!err.is_argument_error());
        assert_eq!(err.to_string(), "balance overflow");
    }
}
