use std::io::{self, BufRead, Write};
use tracing::warn;

use super::{console::parse_number, Console};
use crate::services::SeatingLedger;

/// Пункт меню 2: продажа билета.
///
/// Переспрашивает ряд и место, пока покупка не пройдёт или не закончится ввод.
/// Возвращает `false`, если ввод закончился.
pub fn buy_ticket<R: BufRead, W: Write>(
    ledger: &mut SeatingLedger,
    console: &mut Console<R, W>,
) -> io::Result<bool> {
    // в полностью проданном зале переспрашивать бесполезно
    if ledger.is_sold_out() {
        console.say("\nAll tickets have been sold!")?;
        return Ok(true);
    }

    loop {
        let Some(row) = console.ask("\nEnter a row number:")? else {
            return Ok(false);
        };
        let Some(seat) = console.ask("Enter a seat number in that row:")? else {
            return Ok(false);
        };

        match ledger.purchase(parse_number(&row), parse_number(&seat)) {
            Ok(price) => {
                console.say(format!("\nTicket price: ${price}"))?;
                return Ok(true);
            }
            Err(e) => {
                warn!("buy_ticket: rejected row={:?} seat={:?}: {:?}", row, seat, e);
                console.say(&e)?;
            }
        }
    }
}
