use std::fmt;

use rust_decimal::Decimal;

use crate::error::TransferError;

/// Bank account with a balance that can never go negative
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: u32,
    pub name: String,
    balance: Decimal,
}

impl Account {
    /// Create an account with an initial balance
    /// Fails with `InvalidAmount` if the initial balance is negative
    pub fn new(id: u32, name: impl Into<String>, balance: Decimal) -> Result<Self, TransferError> {
        let mut account = Self {
            id,
            name: name.into(),
            balance: Decimal::ZERO,
        };
        account.set_balance(balance)?;
        Ok(account)
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Store a new balance
    /// Every mutation goes through here, so a negative value is rejected
    /// at assignment and the previous balance is kept
    pub fn set_balance(&mut self, value: Decimal) -> Result<(), TransferError> {
        if value < Decimal::ZERO {
            return Err(TransferError::InvalidAmount {
                attempted_value: value,
            });
        }
        self.balance = value;
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {} Name: {} Balance: {}",
            self.id, self.name, self.balance
        )
    }
}
