// Entity Models
//
// Each account variant implements the shared `Account` capability set.
// `Bank` owns one of each for the lifetime of the session.

pub mod account;
pub mod bank;

pub use account::{Account, AccountType, CurrentAccount, SavingsAccount};
pub use bank::Bank;
