//! analytics.rs
//!
//! Пункт меню 3: статистика продаж по залу.
//!
//! Печатает количество проданных билетов, процент заполнения зала,
//! текущую выручку и выручку при полной продаже.

use std::io::{self, BufRead, Write};

use super::Console;
use crate::{models::Statistics, services::SeatingLedger};

pub fn show_statistics<R: BufRead, W: Write>(
    ledger: &SeatingLedger,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let stats = ledger.statistics();

    match serde_json::to_string(&stats) {
        Ok(json) => tracing::debug!("Статистика зала: {}", json),
        Err(e) => tracing::warn!("show_statistics: не удалось сериализовать статистику: {:?}", e),
    }

    console.say(format_report(&stats))
}

/// Форматирует отчёт в том виде, в котором его видит оператор.
pub fn format_report(stats: &Statistics) -> String {
    format!(
        "\nNumber of purchased tickets: {}\nPercentage: {:.2}%\nCurrent income: ${}\nTotal income: ${}",
        stats.sold_count, stats.sold_percentage, stats.current_income, stats.total_possible_income
    )
}
