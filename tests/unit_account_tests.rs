use funds_transfer::error::TransferError;
use funds_transfer::models::Account;
use rust_decimal_macros::dec;

#[test]
fn test_account_creation() {
    let account = Account::new(101, "Bob", dec!(6000)).unwrap();

    assert_eq!(account.id, 101);
    assert_eq!(account.name, "Bob");
    assert_eq!(account.balance(), dec!(6000));
}

#[test]
fn test_account_creation_with_zero_balance() {
    let account = Account::new(1, "Empty", dec!(0)).unwrap();

    assert_eq!(account.balance(), dec!(0));
}

#[test]
fn test_account_creation_with_negative_balance_fails() {
    let err = Account::new(1, "Overdrawn", dec!(-0.01)).unwrap_err();

    assert_eq!(
        err,
        TransferError::InvalidAmount {
            attempted_value: dec!(-0.01)
        }
    );
}

#[test]
fn test_set_balance_positive_is_observable() {
    let mut account = Account::new(1, "Bob", dec!(100)).unwrap();

    account.set_balance(dec!(250.50)).unwrap();

    assert_eq!(account.balance(), dec!(250.50));
}

#[test]
fn test_set_balance_zero_succeeds() {
    let mut account = Account::new(1, "Bob", dec!(100)).unwrap();

    account.set_balance(dec!(0)).unwrap();

    assert_eq!(account.balance(), dec!(0));
}

#[test]
fn test_set_balance_negative_fails_and_keeps_balance() {
    let mut account = Account::new(1, "Bob", dec!(100)).unwrap();

    let err = account.set_balance(dec!(-5)).unwrap_err();

    assert!(matches!(
        err,
        TransferError::InvalidAmount { attempted_value } if attempted_value == dec!(-5)
    ));
    // Rejected at assignment, previous value kept
    assert_eq!(account.balance(), dec!(100));
}

#[test]
fn test_set_balance_negative_values_always_rejected() {
    let mut account = Account::new(1, "Bob", dec!(10)).unwrap();

    for value in [dec!(-0.0001), dec!(-1), dec!(-10000), dec!(-999999999.99)] {
        assert!(account.set_balance(value).is_err(), "accepted {}", value);
        assert_eq!(account.balance(), dec!(10));
    }
}

#[test]
fn test_display_status_line() {
    let account = Account::new(102, "Jessica", dec!(3000)).unwrap();

    assert_eq!(account.to_string(), "Id: 102 Name: Jessica Balance: 3000");
}
