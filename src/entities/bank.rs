// 🏦 Bank - owns the two demo accounts for the whole session

use crate::config::BankConfig;
use crate::entities::account::{Account, AccountType, CurrentAccount, SavingsAccount};

/// Top-level session state: one Savings and one Current account.
///
/// Accounts are created once and never added or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Bank {
    savings: SavingsAccount,
    current: CurrentAccount,
}

impl Bank {
    pub fn new(config: &BankConfig) -> Self {
        Bank {
            savings: SavingsAccount::new(
                config.savings_opening_balance,
                config.savings_minimum_balance,
            ),
            current: CurrentAccount::new(config.current_opening_balance),
        }
    }

    /// Handle to the selected account
    pub fn account_mut(&mut self, account_type: AccountType) -> &mut dyn Account {
        match account_type {
            AccountType::Savings => &mut self.savings,
            AccountType::Current => &mut self.current,
        }
    }

    pub fn account(&self, account_type: AccountType) -> &dyn Account {
        match account_type {
            AccountType::Savings => &self.savings,
            AccountType::Current => &self.current,
        }
    }
}

impl Default for Bank {
    fn default() -> Self {
        Bank::new(&BankConfig::default())
    }
}
