use std::io::{self, BufRead, Write};

use super::Console;
use crate::services::SeatingLedger;

/// Пункт меню 1: печатает схему зала.
pub fn show_seats<R: BufRead, W: Write>(
    ledger: &SeatingLedger,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.say("\nCinema:")?;
    console.say(ledger.render_grid())
}
