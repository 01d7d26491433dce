// 🖥️ Console - line-oriented terminal I/O shared by the menus
//
// Generic over the reader and writer so a session can be driven from an
// in-memory script as easily as from stdin/stdout.

use crate::error::BankError;
use anyhow::Result;
use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Console {
            input,
            output,
            clear_screen,
        }
    }

    /// Read one line of input with the trailing newline removed.
    ///
    /// Fails with `BankError::InputClosed` at end of input.
    pub fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BankError::InputClosed.into());
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if !self.clear_screen {
            return Ok(());
        }
        clear_terminal(&mut self.output)
    }

    /// Boxed title, e.g.
    ///
    /// ```text
    /// ┌──────────────────────────────┐
    /// │     Savings Account Menu     │
    /// └──────────────────────────────┘
    /// ```
    pub fn header(&mut self, title: &str) -> io::Result<()> {
        self.header_with_padding(title, 5)
    }

    /// Boxed title with `padding` spaces on each side of the text
    pub fn header_with_padding(&mut self, title: &str, padding: usize) -> io::Result<()> {
        let border = "─".repeat(title.chars().count() + 2 * padding);
        let pad = " ".repeat(padding);
        writeln!(self.output, "┌{}┐", border)?;
        writeln!(self.output, "│{}{}{}│", pad, title, pad)?;
        writeln!(self.output, "└{}┘", border)?;
        writeln!(self.output)
    }

    /// Wait for the user to press Enter
    pub fn pause(&mut self) -> Result<()> {
        write!(self.output, "\nPress Enter to continue...")?;
        self.read_line()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R, W: Write> Write for Console<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

#[cfg(feature = "tui")]
fn clear_terminal<W: Write>(output: &mut W) -> io::Result<()> {
    use crossterm::{
        cursor::MoveTo,
        queue,
        terminal::{Clear, ClearType},
    };

    queue!(output, Clear(ClearType::All), MoveTo(0, 0))
}

#[cfg(not(feature = "tui"))]
fn clear_terminal<W: Write>(_output: &mut W) -> io::Result<()> {
    Ok(())
}
