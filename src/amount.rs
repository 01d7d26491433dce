// 💵 Amount Validator - keeps asking until a non-negative number arrives

use crate::console::Console;
use crate::error::{BankError, BankResult};
use anyhow::Result;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Parse a monetary amount. Zero is accepted; negatives are not.
pub fn parse_amount(input: &str) -> BankResult<Decimal> {
    let trimmed = input.trim();
    match Decimal::from_str(trimmed) {
        Ok(amount) if amount >= Decimal::ZERO => Ok(amount),
        _ => Err(BankError::InvalidAmount(trimmed.to_string())),
    }
}

/// Read lines until one parses as a valid amount.
///
/// The caller prints the initial prompt; every rejected line is followed
/// by an error that doubles as the next prompt.
pub fn read_valid_amount<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Decimal> {
    loop {
        let line = console.read_line()?;
        match parse_amount(&line) {
            Ok(amount) => return Ok(amount),
            Err(err) => {
                tracing::warn!(input = %line, "rejected amount");
                write!(console, "{}", err)?;
            }
        }
    }
}
