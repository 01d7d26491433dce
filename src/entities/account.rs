// 💳 Account Entity - one capability set, two variants
//
// Savings keeps a minimum balance after every withdrawal.
// Current may be drawn down to exactly zero.
//
// Balance only changes through deposit/withdraw on the account itself.

use crate::error::{BankError, BankResult};
use rust_decimal::Decimal;

// ============================================================================
// ACCOUNT TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    /// Savings account (minimum balance enforced)
    Savings,

    /// Current account (no overdraft)
    Current,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Savings => "Savings Account",
            AccountType::Current => "Current Account",
        }
    }

    pub fn menu_title(&self) -> &'static str {
        match self {
            AccountType::Savings => "Savings Account Menu",
            AccountType::Current => "Current Account Menu",
        }
    }
}

// ============================================================================
// ACCOUNT CAPABILITIES
// ============================================================================

/// What every account variant can do.
///
/// Both operations return the new balance on success. On failure the
/// balance is untouched and the error carries the message shown to the user.
pub trait Account {
    fn account_type(&self) -> AccountType;

    fn deposit(&mut self, amount: Decimal) -> BankResult<Decimal>;

    fn withdraw(&mut self, amount: Decimal) -> BankResult<Decimal>;

    fn check_balance(&self) -> Decimal;

    fn name(&self) -> &'static str {
        self.account_type().as_str()
    }
}

fn apply_deposit(balance: &mut Decimal, amount: Decimal) -> BankResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(BankError::InvalidDepositAmount(amount));
    }
    match balance.checked_add(amount) {
        Some(new_balance) => {
            *balance = new_balance;
            Ok(new_balance)
        }
        None => Err(BankError::BalanceOverflow {
            balance: *balance,
            requested: amount,
        }),
    }
}

fn apply_withdrawal(balance: &mut Decimal, amount: Decimal, floor: Decimal) -> BankResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(BankError::InvalidWithdrawalAmount(amount));
    }
    if *balance - amount < floor {
        return Err(BankError::InsufficientBalance {
            balance: *balance,
            requested: amount,
            floor,
        });
    }
    *balance -= amount;
    Ok(*balance)
}

// ============================================================================
// SAVINGS ACCOUNT
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsAccount {
    balance: Decimal,
    minimum_balance: Decimal,
}

impl SavingsAccount {
    pub fn new(opening_balance: Decimal, minimum_balance: Decimal) -> Self {
        SavingsAccount {
            balance: opening_balance,
            minimum_balance,
        }
    }

    pub fn minimum_balance(&self) -> Decimal {
        self.minimum_balance
    }
}

impl Account for SavingsAccount {
    fn account_type(&self) -> AccountType {
        AccountType::Savings
    }

    fn deposit(&mut self, amount: Decimal) -> BankResult<Decimal> {
        apply_deposit(&mut self.balance, amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> BankResult<Decimal> {
        apply_withdrawal(&mut self.balance, amount, self.minimum_balance)
    }

    fn check_balance(&self) -> Decimal {
        self.balance
    }
}

// ============================================================================
// CURRENT ACCOUNT
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentAccount {
    balance: Decimal,
}

impl CurrentAccount {
    pub fn new(opening_balance: Decimal) -> Self {
        CurrentAccount {
            balance: opening_balance,
        }
    }
}

impl Account for CurrentAccount {
    fn account_type(&self) -> AccountType {
        AccountType::Current
    }

    fn deposit(&mut self, amount: Decimal) -> BankResult<Decimal> {
        apply_deposit(&mut self.balance, amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> BankResult<Decimal> {
        apply_withdrawal(&mut self.balance, amount, Decimal::ZERO)
    }

    fn check_balance(&self) -> Decimal {
        self.balance
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn savings(balance: i64) -> SavingsAccount {
        SavingsAccount::new(Decimal::from(balance), Decimal::from(1000))
    }

    fn current(balance: i64) -> CurrentAccount {
        CurrentAccount::new(Decimal::from(balance))
    }

    #[test]
    fn test_account_names() {
        assert_eq!(savings(2000).name(), "Savings Account");
        assert_eq!(current(3000).name(), "Current Account");
        assert_eq!(AccountType::Savings.menu_title(), "Savings Account Menu");
        assert_eq!(AccountType::Current.menu_title(), "Current Account Menu");
    }

    #[test]
    fn test_savings_withdraw_scenario() {
        let mut account = savings(2000);

        assert_eq!(account.withdraw(Decimal::from(500)), Ok(Decimal::from(1500)));

        let err = account.withdraw(Decimal::from(600)).unwrap_err();
        assert!(matches!(err, BankError::InsufficientBalance { .. }));
        assert_eq!(account.check_balance(), Decimal::from(1500));
    }

    #[test]
    fn test_savings_can_reach_minimum_exactly() {
        let mut account = savings(2000);
        assert_eq!(account.withdraw(Decimal::from(1000)), Ok(account.minimum_balance()));
        assert!(account.withdraw(Decimal::new(1, 2)).is_err());
    }

    #[test]
    fn test_current_withdraw_scenario() {
        let mut account = current(3000);

        assert_eq!(account.withdraw(Decimal::from(3000)), Ok(Decimal::ZERO));

        let err = account.withdraw(Decimal::ONE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Insufficient balance to complete the withdrawal."
        );
        assert_eq!(account.check_balance(), Decimal::ZERO);
    }

    #[test]
    fn test_deposit_adds_to_balance() {
        let mut account = savings(2000);
        assert_eq!(account.deposit(Decimal::new(2550, 2)), Ok(Decimal::new(202550, 2)));
        assert_eq!(account.check_balance().to_string(), "2025.50");
    }

    #[test]
    fn test_deposit_overflow_is_rejected() {
        let mut account = savings(2000);

        let err = account.deposit(Decimal::MAX).unwrap_err();
        assert_eq!(
            err,
            BankError::BalanceOverflow {
                balance: Decimal::from(2000),
                requested: Decimal::MAX,
            }
        );
        assert_eq!(account.check_balance(), Decimal::from(2000));

        // Still usable afterwards
        assert_eq!(account.deposit(Decimal::ONE), Ok(Decimal::from(2001)));
    }

    #[rstest]
    #[case(-5)]
    #[case(0)]
    fn test_invalid_deposit_leaves_balance(#[case] amount: i64) {
        let amount = Decimal::from(amount);

        let mut s = savings(2000);
        assert_eq!(s.deposit(amount), Err(BankError::InvalidDepositAmount(amount)));
        assert_eq!(s.check_balance(), Decimal::from(2000));

        let mut c = current(3000);
        assert_eq!(c.deposit(amount), Err(BankError::InvalidDepositAmount(amount)));
        assert_eq!(c.check_balance(), Decimal::from(3000));
    }

    #[rstest]
    #[case(-1)]
    #[case(0)]
    fn test_invalid_withdrawal_amount(#[case] amount: i64) {
        let amount = Decimal::from(amount);
        let mut account = current(3000);
        assert_eq!(
            account.withdraw(amount),
            Err(BankError::InvalidWithdrawalAmount(amount))
        );
        assert_eq!(account.check_balance(), Decimal::from(3000));
    }

    #[test]
    fn test_check_balance_is_repeatable() {
        let account = savings(2000);
        let first = account.check_balance();
        let second = account.check_balance();
        assert_eq!(first, second);
        assert_eq!(account, savings(2000));
    }

    fn cents() -> impl Strategy<Value = Decimal> {
        (-1_000_000i64..1_000_000).prop_map(|c| Decimal::new(c, 2))
    }

    proptest! {
        #[test]
        fn prop_non_positive_deposit_is_rejected(balance in cents(), amount in -1_000_000i64..=0) {
            let amount = Decimal::new(amount, 2);
            let mut account = CurrentAccount::new(balance);
            prop_assert!(account.deposit(amount).is_err());
            prop_assert_eq!(account.check_balance(), balance);
        }

        #[test]
        fn prop_savings_withdrawal_rule(balance in cents(), amount in cents()) {
            let floor = Decimal::from(1000);
            let mut account = SavingsAccount::new(balance, floor);
            let should_succeed = amount > Decimal::ZERO && balance - amount >= floor;

            match account.withdraw(amount) {
                Ok(new_balance) => {
                    prop_assert!(should_succeed);
                    prop_assert_eq!(new_balance, balance - amount);
                    prop_assert_eq!(account.check_balance(), balance - amount);
                }
                Err(_) => {
                    prop_assert!(!should_succeed);
                    prop_assert_eq!(account.check_balance(), balance);
                }
            }
        }

        #[test]
        fn prop_current_withdrawal_rule(balance in cents(), amount in cents()) {
            let mut account = CurrentAccount::new(balance);
            let should_succeed = amount > Decimal::ZERO && balance - amount >= Decimal::ZERO;

            match account.withdraw(amount) {
                Ok(new_balance) => {
                    prop_assert!(should_succeed);
                    prop_assert_eq!(new_balance, balance - amount);
                }
                Err(_) => {
                    prop_assert!(!should_succeed);
                    prop_assert_eq!(account.check_balance(), balance);
                }
            }
        }
    }
}
