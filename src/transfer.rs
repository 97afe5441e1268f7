use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::TransferError;
use crate::models::Account;

/// Largest amount a single transfer may move
pub const MAX_TRANSFER_AMOUNT: Decimal = Decimal::from_parts(10000, 0, 0, false, 0);

/// How a transfer mutates balances when a later check fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Settlement {
    /// Validate both sides before touching either balance.
    /// A rejected transfer never changes any balance.
    #[default]
    Atomic,
    /// Debit the source before looking at the destination.
    /// A missing destination leaves the source debited with no matching credit.
    Legacy,
}

impl Settlement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Settlement::Atomic => "atomic",
            Settlement::Legacy => "legacy",
        }
    }
}

/// Moves funds between two accounts under a settlement policy
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferService {
    settlement: Settlement,
}

impl TransferService {
    pub fn new(settlement: Settlement) -> Self {
        Self { settlement }
    }

    pub fn settlement(&self) -> Settlement {
        self.settlement
    }

    /// Transfer `amount` from `source` to `destination`
    ///
    /// Checks run in a fixed order and the first failing one wins:
    /// amount range, source present, source funds, destination present.
    /// Both balances are written through `Account::set_balance`.
    pub fn transfer(
        &self,
        source: Option<&mut Account>,
        destination: Option<&mut Account>,
        amount: Decimal,
    ) -> Result<(), TransferError> {
        let result = match self.settlement {
            Settlement::Atomic => transfer_atomic(source, destination, amount),
            Settlement::Legacy => transfer_legacy(source, destination, amount),
        };

        match &result {
            Ok(()) => debug!(%amount, settlement = self.settlement.as_str(), "funds transferred"),
            Err(err) => warn!(
                kind = %err.kind(),
                %amount,
                settlement = self.settlement.as_str(),
                "transfer rejected: {}",
                err
            ),
        }

        result
    }
}

/// Transfer with the default service (atomic settlement)
pub fn transfer(
    source: Option<&mut Account>,
    destination: Option<&mut Account>,
    amount: Decimal,
) -> Result<(), TransferError> {
    TransferService::default().transfer(source, destination, amount)
}

fn check_amount(amount: Decimal) -> Result<(), TransferError> {
    if amount <= Decimal::ZERO || amount > MAX_TRANSFER_AMOUNT {
        return Err(TransferError::amount_out_of_range(amount));
    }
    Ok(())
}

fn require_source(source: Option<&mut Account>) -> Result<&mut Account, TransferError> {
    source.ok_or(TransferError::NullSourceAccount {
        cause: "source account reference is absent",
    })
}

fn require_destination(destination: Option<&mut Account>) -> Result<&mut Account, TransferError> {
    destination.ok_or(TransferError::NullDestinationAccount {
        cause: "destination account reference is absent",
    })
}

fn check_funds(source: &Account, amount: Decimal) -> Result<(), TransferError> {
    if amount > source.balance() {
        return Err(TransferError::InsufficientFunds {
            current_balance: source.balance(),
        });
    }
    Ok(())
}

fn debited_balance(source: &Account, amount: Decimal) -> Result<Decimal, TransferError> {
    let original = source.balance();
    match original.checked_sub(amount) {
        Some(debited) if original - debited == amount => Ok(debited),
        _ => Err(TransferError::unclassified(format!(
            "Debiting {} from account {} cannot be represented exactly",
            amount, source.id
        ))),
    }
}

/// Decimal addition rounds once the result needs more than 28 digits,
/// so the credit must be checked to carry the full amount
fn credited_balance(destination: &Account, amount: Decimal) -> Result<Decimal, TransferError> {
    let original = destination.balance();
    let credited = original.checked_add(amount).ok_or_else(|| {
        TransferError::unclassified(format!(
            "Crediting {} to account {} overflows its balance",
            amount, destination.id
        ))
    })?;
    if credited - original != amount {
        return Err(TransferError::unclassified(format!(
            "Crediting {} to account {} cannot be represented exactly",
            amount, destination.id
        )));
    }
    Ok(credited)
}

fn transfer_atomic(
    source: Option<&mut Account>,
    destination: Option<&mut Account>,
    amount: Decimal,
) -> Result<(), TransferError> {
    check_amount(amount)?;
    let source = require_source(source)?;
    check_funds(source, amount)?;
    let destination = require_destination(destination)?;

    let original = source.balance();
    let debited = debited_balance(source, amount)?;
    let credited = credited_balance(destination, amount)?;

    source.set_balance(debited)?;
    if let Err(err) = destination.set_balance(credited) {
        source.set_balance(original)?;
        return Err(err);
    }
    Ok(())
}

fn transfer_legacy(
    source: Option<&mut Account>,
    destination: Option<&mut Account>,
    amount: Decimal,
) -> Result<(), TransferError> {
    check_amount(amount)?;
    let source = require_source(source)?;
    check_funds(source, amount)?;

    let debited = debited_balance(source, amount)?;
    source.set_balance(debited)?;

    let destination = require_destination(destination)?;
    let credited = credited_balance(destination, amount)?;
    destination.set_balance(credited)
}
