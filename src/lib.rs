// Bank Menu - Core Library
// Exposes all modules for use in the CLI and tests

pub mod error;
pub mod config;
pub mod entities;   // Account variants + Bank
pub mod console;    // Terminal I/O
pub mod amount;     // Amount Validator
pub mod ui;         // Main Menu + Account Menu

// Re-export commonly used types
pub use error::{BankError, BankResult};
pub use config::BankConfig;
pub use entities::{
    Account, AccountType, Bank, CurrentAccount, SavingsAccount,
};
pub use console::Console;
pub use amount::{parse_amount, read_valid_amount};
pub use ui::{
    AccountMenuChoice, MainMenuChoice,
    parse_selection, run_account_menu, run_main_menu,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
