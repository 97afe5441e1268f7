#![allow(dead_code)]

use funds_transfer::logger::MemorySink;
use funds_transfer::models::Account;
use funds_transfer::transfer::TransferService;
use funds_transfer::{run_scenario, Scenario, ScenarioOutcome};
use rust_decimal::Decimal;

/// Helper to create an account, panicking on an invalid initial balance
pub fn make_account(id: u32, name: &str, balance: Decimal) -> Account {
    Account::new(id, name, balance).unwrap()
}

/// Bob and Jessica with the demo balances (6000 and 3000)
pub fn demo_accounts() -> (Account, Account) {
    (
        make_account(101, "Bob", Decimal::from(6000)),
        make_account(102, "Jessica", Decimal::from(3000)),
    )
}

/// Run a scenario against an in-memory sink and return the outcome,
/// the captured console output and the sink
pub fn run_captured(
    scenario: Scenario,
    service: &TransferService,
) -> (ScenarioOutcome, String, MemorySink) {
    let mut sink = MemorySink::new();
    let mut output = Vec::new();
    let outcome = run_scenario(scenario, service, &mut sink, &mut output).unwrap();
    (outcome, String::from_utf8(output).unwrap(), sink)
}

/// Assert that the console output contains a status line for the account
pub fn assert_account_line(output: &str, id: u32, name: &str, balance: &str) {
    let line = format!("Id: {} Name: {} Balance: {}", id, name, balance);
    assert!(
        output.lines().any(|l| l == line),
        "Expected output to contain line '{}'\nActual output:\n{}",
        line,
        output
    );
}
