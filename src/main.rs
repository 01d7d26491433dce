use anyhow::Result;
use std::io::{self, IsTerminal, Write};
use tracing_subscriber::EnvFilter;

use bank_menu::{run_main_menu, Bank, BankConfig, BankError, Console};

fn main() -> Result<()> {
    init_tracing();

    let config = BankConfig::default().with_clear_screen(io::stdout().is_terminal());
    let mut bank = Bank::new(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config.clear_screen);

    tracing::info!(version = bank_menu::VERSION, "session started");

    match run_main_menu(&mut console, &mut bank) {
        Ok(()) => Ok(()),
        Err(err) if matches!(err.downcast_ref::<BankError>(), Some(BankError::InputClosed)) => {
            tracing::info!("input closed");
            writeln!(console, "\nInput closed. Goodbye!")?;
            Ok(())
        }
        Err(err) => Err(err),
    }
}

// Silent unless RUST_LOG is set; logs go to stderr so the menu screen stays clean
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
