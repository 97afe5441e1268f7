pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod report;
pub mod transfer;

use std::io::Write;

use rust_decimal::Decimal;
use tracing::{info, warn};

use error::{DriverError, Result, TransferError};
use logger::ErrorSink;
use models::Account;
use transfer::TransferService;

/// Which of the scenario's accounts a transfer side refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    First,
    Second,
    /// No account supplied
    Absent,
}

/// Two accounts and one transfer between them
#[derive(Debug, Clone)]
pub struct Scenario {
    pub first: Account,
    pub second: Account,
    pub source: Party,
    pub destination: Party,
    pub amount: Decimal,
}

impl Scenario {
    /// The fixed demonstration: Bob (101, 6000) and Jessica (102, 3000) exist,
    /// and 4000 is sent from Bob to an account that was never supplied.
    pub fn demo() -> Result<Self> {
        Ok(Self {
            first: Account::new(101, "Bob", Decimal::from(6000)).map_err(DriverError::Setup)?,
            second: Account::new(102, "Jessica", Decimal::from(3000))
                .map_err(DriverError::Setup)?,
            source: Party::First,
            destination: Party::Absent,
            amount: Decimal::from(4000),
        })
    }
}

/// Result of one driver run
#[derive(Debug)]
pub struct ScenarioOutcome {
    /// Both accounts as they stand after the transfer attempt
    pub accounts: [Account; 2],
    /// Condition that rejected the transfer, if any
    pub condition: Option<TransferError>,
}

/// Run a scenario, print account state before and after, and report any
/// condition on the console and to the sink
pub fn run_scenario<W: Write, S: ErrorSink>(
    scenario: Scenario,
    service: &TransferService,
    sink: &mut S,
    mut writer: W,
) -> Result<ScenarioOutcome> {
    let Scenario {
        mut first,
        mut second,
        source,
        destination,
        amount,
    } = scenario;

    info!(
        settlement = service.settlement().as_str(),
        ?source,
        ?destination,
        %amount,
        "running transfer scenario"
    );

    write_accounts(&[&first, &second], &mut writer)?;

    let (from, to) = resolve_parties(&mut first, &mut second, source, destination)?;
    let result = service.transfer(from, to, amount);
    let condition = handle_result(result, sink, &mut writer)?;

    match condition {
        None => {
            writeln!(writer, "Funds transferred.")?;
            writeln!(writer, "After transfer: ")?;
        }
        Some(_) => writeln!(writer, "Final balances: ")?,
    }
    write_accounts(&[&first, &second], &mut writer)?;
    writer.flush()?;

    Ok(ScenarioOutcome {
        accounts: [first, second],
        condition,
    })
}

/// Report a transfer result on the console and record a rejection in the sink
///
/// Returns the condition that was handled. A sink failure is logged and
/// swallowed: the condition has already been reported on the console.
pub fn handle_result<W: Write, S: ErrorSink>(
    result: std::result::Result<(), TransferError>,
    sink: &mut S,
    writer: &mut W,
) -> Result<Option<TransferError>> {
    let condition = match result {
        Ok(()) => return Ok(None),
        Err(condition) => condition,
    };

    for line in report::describe(&condition) {
        writeln!(writer, "{}", line)?;
    }

    if let Err(e) = sink.record(&condition) {
        warn!(kind = %condition.kind(), "could not record condition: {}", e);
    }

    Ok(Some(condition))
}

type Sides<'a> = (Option<&'a mut Account>, Option<&'a mut Account>);

fn resolve_parties<'a>(
    first: &'a mut Account,
    second: &'a mut Account,
    source: Party,
    destination: Party,
) -> Result<Sides<'a>> {
    let sides = match (source, destination) {
        (Party::First, Party::Second) => (Some(first), Some(second)),
        (Party::Second, Party::First) => (Some(second), Some(first)),
        (Party::First, Party::Absent) => (Some(first), None),
        (Party::Second, Party::Absent) => (Some(second), None),
        (Party::Absent, Party::First) => (None, Some(first)),
        (Party::Absent, Party::Second) => (None, Some(second)),
        (Party::Absent, Party::Absent) => (None, None),
        (Party::First, Party::First) | (Party::Second, Party::Second) => {
            return Err(DriverError::Setup(TransferError::unclassified(
                "source and destination must be different accounts",
            )))
        }
    };
    Ok(sides)
}

/// Write one status line per account
fn write_accounts<W: Write>(accounts: &[&Account], writer: &mut W) -> Result<()> {
    for account in accounts {
        writeln!(writer, "{}", account)?;
    }
    Ok(())
}
