use crate::amount::read_valid_amount;
use crate::console::Console;
use crate::entities::{Account, AccountType, Bank};
use crate::error::{BankError, BankResult};
use anyhow::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    Open(AccountType),
    Exit,
}

impl MainMenuChoice {
    pub fn from_selection(selection: i64) -> BankResult<Self> {
        match selection {
            1 => Ok(MainMenuChoice::Open(AccountType::Savings)),
            2 => Ok(MainMenuChoice::Open(AccountType::Current)),
            3 => Ok(MainMenuChoice::Exit),
            other => Err(BankError::InvalidMenuSelection(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountMenuChoice {
    Deposit,
    Withdraw,
    CheckBalance,
    Back,
}

impl AccountMenuChoice {
    pub fn from_selection(selection: i64) -> BankResult<Self> {
        match selection {
            1 => Ok(AccountMenuChoice::Deposit),
            2 => Ok(AccountMenuChoice::Withdraw),
            3 => Ok(AccountMenuChoice::CheckBalance),
            4 => Ok(AccountMenuChoice::Back),
            other => Err(BankError::InvalidMenuSelection(other)),
        }
    }

    /// Header of the screen shown for this action; Back has none
    pub fn title(&self) -> Option<&'static str> {
        match self {
            AccountMenuChoice::Deposit => Some("Enter amount to deposit"),
            AccountMenuChoice::Withdraw => Some("Enter amount to withdraw"),
            AccountMenuChoice::CheckBalance => Some("Current Balance"),
            AccountMenuChoice::Back => None,
        }
    }
}

/// Parse a menu selection; anything that isn't an integer is rejected.
pub fn parse_selection(input: &str) -> BankResult<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| BankError::InvalidNumericInput(trimmed.to_string()))
}

/// Main menu loop. Returns when the user picks Exit.
pub fn run_main_menu<R: BufRead, W: Write>(console: &mut Console<R, W>, bank: &mut Bank) -> Result<()> {
    loop {
        console.clear()?;
        console.header_with_padding("Main Menu", 7)?;
        writeln!(console, "[1] Savings Account")?;
        writeln!(console, "[2] Current Account")?;
        writeln!(console, "[3] Exit")?;
        writeln!(console)?;
        write!(console, "Select an option: ")?;

        let line = console.read_line()?;
        match parse_selection(&line).and_then(MainMenuChoice::from_selection) {
            Ok(MainMenuChoice::Open(account_type)) => {
                tracing::info!(account = account_type.as_str(), "opening account menu");
                run_account_menu(console, bank.account_mut(account_type))?;
            }
            Ok(MainMenuChoice::Exit) => {
                writeln!(console, "Exiting the system. Goodbye!")?;
                console.flush()?;
                tracing::info!("exit selected");
                return Ok(());
            }
            Err(err) => report_invalid_selection(console, err)?,
        }
    }
}

/// Account menu loop for the selected account. Returns on Back.
pub fn run_account_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    account: &mut dyn Account,
) -> Result<()> {
    loop {
        console.clear()?;
        console.header(account.account_type().menu_title())?;
        writeln!(console, "[1] Deposit")?;
        writeln!(console, "[2] Withdraw")?;
        writeln!(console, "[3] Check Balance")?;
        writeln!(console, "[4] Back")?;
        write!(console, "Select an option: ")?;

        let line = console.read_line()?;
        let choice = match parse_selection(&line).and_then(AccountMenuChoice::from_selection) {
            Ok(choice) => choice,
            Err(err) => {
                report_invalid_selection(console, err)?;
                continue;
            }
        };

        console.clear()?;
        if let Some(title) = choice.title() {
            console.header(title)?;
        }
        match choice {
            AccountMenuChoice::Deposit => {
                write!(console, "Amount: ")?;
                let amount = read_valid_amount(console)?;
                match account.deposit(amount) {
                    Ok(balance) => {
                        tracing::debug!(account = account.name(), %amount, %balance, "deposit");
                        writeln!(console, "Deposited: {}. New balance: {}", amount, balance)?;
                    }
                    Err(err) => {
                        tracing::warn!(account = account.name(), %amount, "deposit rejected");
                        writeln!(console, "{}", err)?;
                    }
                }
            }
            AccountMenuChoice::Withdraw => {
                write!(console, "Amount: ")?;
                let amount = read_valid_amount(console)?;
                match account.withdraw(amount) {
                    Ok(balance) => {
                        tracing::debug!(account = account.name(), %amount, %balance, "withdrawal");
                        writeln!(console, "Withdrawn: {}. New balance: {}", amount, balance)?;
                    }
                    Err(err) => {
                        tracing::warn!(account = account.name(), %amount, "withdrawal rejected");
                        writeln!(console, "{}", err)?;
                    }
                }
            }
            AccountMenuChoice::CheckBalance => {
                writeln!(console, "Balance: {}", account.check_balance())?;
            }
            AccountMenuChoice::Back => {
                writeln!(console, "Returning to Main Menu...")?;
                console.pause()?;
                return Ok(());
            }
        }
        console.pause()?;
    }
}

fn report_invalid_selection<R: BufRead, W: Write>(console: &mut Console<R, W>, err: BankError) -> Result<()> {
    tracing::warn!(error = %err, "invalid menu selection");
    if matches!(err, BankError::InvalidNumericInput(_)) {
        console.clear()?;
    }
    writeln!(console, "{}", err)?;
    console.pause()
}
