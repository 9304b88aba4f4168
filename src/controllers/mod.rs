pub mod analytics;
pub mod bookings;
pub mod console;
pub mod seats;

pub use console::Console;

use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::info;

use crate::{config::PricingConfig, services::SeatingLedger};
use console::parse_number;

pub const MENU: &str = "\n1. Show the seats\n2. Buy a ticket\n3. Statistics\n0. Exit";
pub const UNKNOWN_OPTION: &str = "\nSorry, I didn't recognise that option.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowSeats,
    BuyTicket,
    Statistics,
    Exit,
}

impl MenuAction {
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(MenuAction::ShowSeats),
            "2" => Some(MenuAction::BuyTicket),
            "3" => Some(MenuAction::Statistics),
            "0" => Some(MenuAction::Exit),
            _ => None,
        }
    }
}

/// Спрашивает размеры зала и создаёт его. `None`, если ввод закончился раньше.
pub fn open_hall<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    pricing: PricingConfig,
) -> anyhow::Result<Option<SeatingLedger>> {
    let Some(rows) = console.ask("Enter the number of rows:")? else {
        return Ok(None);
    };
    let Some(seats) = console.ask("Enter the number of seats in each row:")? else {
        return Ok(None);
    };

    let ledger = SeatingLedger::with_pricing(parse_number(&rows), parse_number(&seats), pricing)
        .with_context(|| format!("cannot open a hall of {rows:?} rows and {seats:?} seats"))?;

    Ok(Some(ledger))
}

/// Главный цикл меню. Работает до пункта 0 или до конца ввода.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    pricing: PricingConfig,
) -> anyhow::Result<()> {
    let Some(mut ledger) = open_hall(console, pricing)? else {
        info!("Input closed before the hall was set up");
        return Ok(());
    };

    loop {
        console.say(MENU)?;
        let Some(choice) = console.read_line()? else {
            break;
        };

        match MenuAction::parse(&choice) {
            Some(MenuAction::ShowSeats) => seats::show_seats(&ledger, console)?,
            Some(MenuAction::BuyTicket) => {
                if !bookings::buy_ticket(&mut ledger, console)? {
                    break;
                }
            }
            Some(MenuAction::Statistics) => analytics::show_statistics(&ledger, console)?,
            Some(MenuAction::Exit) => break,
            None => console.say(UNKNOWN_OPTION)?,
        }
    }

    info!(sold = ledger.sold_count(), "Menu loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_choices_are_parsed() {
        assert_eq!(MenuAction::parse("1"), Some(MenuAction::ShowSeats));
        assert_eq!(MenuAction::parse(" 2 "), Some(MenuAction::BuyTicket));
        assert_eq!(MenuAction::parse("3"), Some(MenuAction::Statistics));
        assert_eq!(MenuAction::parse("0"), Some(MenuAction::Exit));
        assert_eq!(MenuAction::parse("4"), None);
        assert_eq!(MenuAction::parse("exit"), None);
    }
}
