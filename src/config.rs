// ⚙️ Bank configuration - fixed parameters for the demo accounts

use rust_decimal::Decimal;

/// Fixed parameters of a banking session.
///
/// There is no config file or flag; `Default` carries the demo values and
/// `main` only adjusts `clear_screen` for non-interactive output.
#[derive(Debug, Clone, PartialEq)]
pub struct BankConfig {
    /// Opening balance of the Savings account
    pub savings_opening_balance: Decimal,

    /// Opening balance of the Current account
    pub current_opening_balance: Decimal,

    /// Floor a Savings account balance may not drop below after a withdrawal
    pub savings_minimum_balance: Decimal,

    /// Clear the terminal before each screen
    pub clear_screen: bool,
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            savings_opening_balance: Decimal::from(2000),
            current_opening_balance: Decimal::from(3000),
            savings_minimum_balance: Decimal::from(1000),
            clear_screen: true,
        }
    }
}

impl BankConfig {
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }
}
