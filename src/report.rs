use std::backtrace::{Backtrace, BacktraceStatus};

use crate::error::TransferError;

/// Console lines for a handled condition
///
/// Each condition gets its own presentation: the range violation shows the
/// offending value and parameter, the null references show their cause,
/// insufficient funds shows where it was caught when a backtrace is available.
/// That backtrace is taken here, so it shows the reporting call stack rather
/// than the transfer check that rejected the funds.
pub fn describe(condition: &TransferError) -> Vec<String> {
    match condition {
        TransferError::AmountOutOfRange { amount, param_name } => vec![
            condition.to_string(),
            format!("Actual value: {}", amount),
            format!("Parameter: {}", param_name),
        ],
        TransferError::NullSourceAccount { cause } | TransferError::NullDestinationAccount { cause } => {
            vec![condition.to_string(), format!("Cause: {}", cause)]
        }
        TransferError::InsufficientFunds { .. } => {
            let mut lines = vec![condition.to_string()];
            let backtrace = Backtrace::capture();
            if backtrace.status() == BacktraceStatus::Captured {
                lines.push(backtrace.to_string());
            }
            lines
        }
        TransferError::InvalidAmount { .. } | TransferError::Unclassified { .. } => {
            vec![condition.to_string()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_out_of_range_shows_value_and_parameter() {
        let lines = describe(&TransferError::amount_out_of_range(dec!(-5)));

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Actual value: -5");
        assert_eq!(lines[2], "Parameter: amount");
    }

    #[test]
    fn test_null_destination_shows_cause() {
        let lines = describe(&TransferError::NullDestinationAccount {
            cause: "destination account reference is absent",
        });

        assert_eq!(lines[0], "You have supplied no value for 'accountTo'");
        assert_eq!(lines[1], "Cause: destination account reference is absent");
    }

    #[test]
    fn test_invalid_amount_is_single_line() {
        let lines = describe(&TransferError::InvalidAmount {
            attempted_value: dec!(-1),
        });

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("-1"));
    }
}
