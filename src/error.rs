// ⚠️ Error taxonomy for the banking menu
// Every variant except InputClosed is recovered locally by re-prompting.

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// A number that doesn't name any menu option (e.g. "9" at a 4-option menu)
    #[error("Invalid option. Please try again.")]
    InvalidMenuSelection(i64),

    /// Input that couldn't be parsed as a number at all
    #[error("Invalid input. Please enter a valid option.")]
    InvalidNumericInput(String),

    /// Amount line that isn't a non-negative number; doubles as the re-prompt
    #[error("Invalid input. Please enter a valid amount: ")]
    InvalidAmount(String),

    #[error("Invalid deposit amount. Please enter a positive value.")]
    InvalidDepositAmount(Decimal),

    #[error("Invalid withdrawal amount.")]
    InvalidWithdrawalAmount(Decimal),

    /// Withdrawal would take the balance below `floor`
    #[error("{}", insufficient_balance_message(.floor))]
    InsufficientBalance { balance: Decimal, requested: Decimal, floor: Decimal },

    /// Deposit would push the balance past the largest representable amount
    #[error("Deposit rejected. The new balance would exceed the maximum supported amount.")]
    BalanceOverflow { balance: Decimal, requested: Decimal },

    /// Input stream reached end of file
    #[error("Input closed.")]
    InputClosed,
}

fn insufficient_balance_message(floor: &Decimal) -> String {
    if floor.is_zero() {
        "Insufficient balance to complete the withdrawal.".to_string()
    } else {
        format!(
            "Insufficient balance. Minimum balance of {} must be maintained.",
            floor
        )
    }
}

pub type BankResult<T> = std::result::Result<T, BankError>;
