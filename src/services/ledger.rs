//! ledger.rs
//!
//! Учёт мест в одном кинозале.
//!
//! `SeatingLedger` владеет схемой занятости зала и отвечает за:
//! - продажу билета на конкретное место (с проверкой границ и повторной продажи);
//! - расчёт цены билета по ряду;
//! - построение текстовой схемы зала;
//! - подсчёт статистики продаж и выручки.
//!
//! Места адресуются парой `(ряд, место)`, нумерация с единицы.

use tracing::{debug, info};
use validator::Validate;

use crate::{
    config::PricingConfig,
    error::LedgerError,
    models::{HallDimensions, Seat, SeatStatus, Statistics},
};

/// Самый большой зал, который можно открыть.
pub const MAX_SEATS: usize = 1_000_000;

#[derive(Debug, Clone)]
pub struct SeatingLedger {
    dimensions: HallDimensions,
    pricing: PricingConfig,
    /// Ряд за рядом, `rows * seats_per_row` элементов.
    occupancy: Vec<SeatStatus>,
}

impl SeatingLedger {
    /// Создаёт зал со стандартными ценами, все места свободны.
    pub fn new(rows: usize, seats_per_row: usize) -> Result<Self, LedgerError> {
        Self::with_pricing(rows, seats_per_row, PricingConfig::default())
    }

    pub fn with_pricing(
        rows: usize,
        seats_per_row: usize,
        pricing: PricingConfig,
    ) -> Result<Self, LedgerError> {
        let invalid = || LedgerError::InvalidDimension { rows, seats_per_row };

        let dimensions = HallDimensions::new(rows, seats_per_row);
        dimensions.validate().map_err(|_| invalid())?;
        let total = rows
            .checked_mul(seats_per_row)
            .filter(|&total| total <= MAX_SEATS)
            .ok_or_else(invalid)?;

        let mut occupancy = Vec::new();
        occupancy.try_reserve_exact(total).map_err(|_| invalid())?;
        occupancy.resize(total, SeatStatus::Free);

        info!(rows, seats_per_row, total, "Cinema hall initialized");

        Ok(Self {
            dimensions,
            pricing,
            occupancy,
        })
    }

    pub fn rows(&self) -> usize {
        self.dimensions.rows
    }

    pub fn seats_per_row(&self) -> usize {
        self.dimensions.seats_per_row
    }

    pub fn total_seats(&self) -> usize {
        self.occupancy.len()
    }

    /// Цена билета в ряду `row`.
    ///
    /// В маленьком зале все места стоят одинаково. В большом передняя половина
    /// рядов (`row <= rows / 2`) дороже задней. Номер ряда здесь не проверяется.
    pub fn seat_price(&self, row: usize) -> u32 {
        if self.total_seats() <= self.pricing.small_hall_limit || row <= self.rows() / 2 {
            self.pricing.front_price
        } else {
            self.pricing.back_price
        }
    }

    fn index(&self, row: usize, seat: usize) -> Result<usize, LedgerError> {
        if row == 0 || row > self.rows() || seat == 0 || seat > self.seats_per_row() {
            return Err(LedgerError::OutOfRange { row, seat });
        }
        Ok((row - 1) * self.seats_per_row() + (seat - 1))
    }

    /// Продаёт билет и возвращает его цену.
    ///
    /// При ошибке схема зала не меняется.
    pub fn purchase(&mut self, row: usize, seat: usize) -> Result<u32, LedgerError> {
        let idx = self.index(row, seat)?;

        if self.occupancy[idx].is_sold() {
            return Err(LedgerError::AlreadySold { row, seat });
        }

        self.occupancy[idx] = SeatStatus::Sold;
        let price = self.seat_price(row);
        debug!(row, seat, price, "Ticket sold");

        Ok(price)
    }

    pub fn seat(&self, row: usize, seat: usize) -> Result<Seat, LedgerError> {
        let idx = self.index(row, seat)?;
        Ok(Seat {
            row,
            number: seat,
            status: self.occupancy[idx],
            price: self.seat_price(row),
        })
    }

    pub fn seats_in_row(&self, row: usize) -> Result<Vec<Seat>, LedgerError> {
        // проверка ряда через первое место
        self.index(row, 1)?;
        (1..=self.seats_per_row()).map(|n| self.seat(row, n)).collect()
    }

    pub fn sold_count(&self) -> usize {
        self.occupancy.iter().filter(|s| s.is_sold()).count()
    }

    pub fn is_sold_out(&self) -> bool {
        self.occupancy.iter().all(|s| s.is_sold())
    }

    /// Текстовая схема зала: строка с номерами мест, затем по строке на ряд.
    ///
    /// ```text
    ///   1 2 3
    /// 1 S S S
    /// 2 S B S
    /// ```
    pub fn render_grid(&self) -> String {
        let header = std::iter::once(" ".to_string())
            .chain((1..=self.seats_per_row()).map(|n| n.to_string()))
            .collect::<Vec<_>>()
            .join(" ");

        let rows = self
            .occupancy
            .chunks(self.seats_per_row())
            .enumerate()
            .map(|(i, seats)| {
                std::iter::once((i + 1).to_string())
                    .chain(seats.iter().map(|s| s.to_string()))
                    .collect::<Vec<_>>()
                    .join(" ")
            });

        std::iter::once(header).chain(rows).collect::<Vec<_>>().join("\n")
    }

    pub fn statistics(&self) -> Statistics {
        let mut sold_count = 0;
        let mut current_income = 0u64;
        let mut total_possible_income = 0u64;

        for (i, seats) in self.occupancy.chunks(self.seats_per_row()).enumerate() {
            let price = u64::from(self.seat_price(i + 1));
            let sold = seats.iter().filter(|s| s.is_sold()).count();

            sold_count += sold;
            current_income += price * sold as u64;
            total_possible_income += price * seats.len() as u64;
        }

        let total_seats = self.total_seats();
        let raw_percentage = sold_count as f64 / total_seats as f64 * 100.0;

        Statistics {
            total_seats,
            sold_count,
            free_count: total_seats - sold_count,
            sold_percentage: (raw_percentage * 100.0).round() / 100.0,
            current_income,
            total_possible_income,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_hall_is_empty() {
        let ledger = SeatingLedger::new(7, 8).unwrap();
        assert_eq!(ledger.total_seats(), 56);
        assert_eq!(ledger.sold_count(), 0);
        for row in 1..=7 {
            for seat in 1..=8 {
                assert_eq!(ledger.seat(row, seat).unwrap().status, SeatStatus::Free);
            }
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            SeatingLedger::new(0, 5).unwrap_err(),
            LedgerError::InvalidDimension { rows: 0, seats_per_row: 5 }
        );
        assert_eq!(
            SeatingLedger::new(3, 0).unwrap_err(),
            LedgerError::InvalidDimension { rows: 3, seats_per_row: 0 }
        );
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let err = SeatingLedger::new(usize::MAX, 2).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidDimension { .. }));
    }

    #[test]
    fn oversized_halls_are_rejected_without_allocating() {
        let err = SeatingLedger::new(1usize << 63, 1).unwrap_err();
        assert_eq!(err, LedgerError::InvalidDimension { rows: 1 << 63, seats_per_row: 1 });

        assert!(matches!(
            SeatingLedger::new(MAX_SEATS + 1, 1),
            Err(LedgerError::InvalidDimension { .. })
        ));
        assert_eq!(SeatingLedger::new(1000, 1000).unwrap().total_seats(), MAX_SEATS);
    }

    #[test]
    fn large_hall_splits_prices_by_half() {
        let ledger = SeatingLedger::new(10, 9).unwrap();
        for row in 1..=5 {
            assert_eq!(ledger.seat_price(row), 10, "row {row}");
        }
        for row in 6..=10 {
            assert_eq!(ledger.seat_price(row), 8, "row {row}");
        }
    }

    #[test]
    fn odd_row_count_puts_middle_row_in_back_half() {
        let ledger = SeatingLedger::new(9, 10).unwrap();
        assert_eq!(ledger.seat_price(4), 10);
        assert_eq!(ledger.seat_price(5), 8);
    }

    #[test]
    fn small_hall_has_flat_price() {
        let ledger = SeatingLedger::new(5, 10).unwrap();
        assert!((1..=5).all(|row| ledger.seat_price(row) == 10));
    }

    #[test]
    fn sixty_seats_is_still_a_small_hall() {
        let ledger = SeatingLedger::new(6, 10).unwrap();
        assert_eq!(ledger.seat_price(6), 10);
        let ledger = SeatingLedger::new(61, 1).unwrap();
        assert_eq!(ledger.seat_price(61), 8);
    }

    #[test]
    fn custom_pricing_is_applied() {
        let pricing = PricingConfig { small_hall_limit: 10, front_price: 15, back_price: 12 };
        let mut ledger = SeatingLedger::with_pricing(4, 4, pricing).unwrap();
        assert_eq!(ledger.purchase(1, 1).unwrap(), 15);
        assert_eq!(ledger.purchase(4, 4).unwrap(), 12);
        assert_eq!(ledger.statistics().total_possible_income, 8 * 15 + 8 * 12);
    }

    #[test]
    fn purchase_marks_seat_and_returns_price() {
        let mut ledger = SeatingLedger::new(10, 9).unwrap();
        assert_eq!(ledger.purchase(7, 3).unwrap(), 8);
        assert_eq!(ledger.seat(7, 3).unwrap().status, SeatStatus::Sold);
        assert_eq!(ledger.sold_count(), 1);
    }

    #[test]
    fn second_purchase_of_same_seat_fails() {
        let mut ledger = SeatingLedger::new(3, 3).unwrap();
        ledger.purchase(2, 2).unwrap();
        assert_eq!(
            ledger.purchase(2, 2).unwrap_err(),
            LedgerError::AlreadySold { row: 2, seat: 2 }
        );
        assert_eq!(ledger.sold_count(), 1);
    }

    #[test]
    fn out_of_range_purchase_leaves_hall_untouched() {
        let mut ledger = SeatingLedger::new(3, 4).unwrap();
        for (row, seat) in [(0, 1), (1, 0), (4, 1), (1, 5), (100, 100)] {
            assert_eq!(
                ledger.purchase(row, seat).unwrap_err(),
                LedgerError::OutOfRange { row, seat }
            );
        }
        assert_eq!(ledger.sold_count(), 0);
    }

    #[test]
    fn grid_shows_header_and_sold_seats() {
        let mut ledger = SeatingLedger::new(2, 3).unwrap();
        ledger.purchase(2, 2).unwrap();
        assert_eq!(ledger.render_grid(), "  1 2 3\n1 S S S\n2 S B S");
    }

    #[test]
    fn seats_in_row_lists_every_seat() {
        let mut ledger = SeatingLedger::new(10, 9).unwrap();
        ledger.purchase(8, 1).unwrap();
        let row = ledger.seats_in_row(8).unwrap();
        assert_eq!(row.len(), 9);
        assert_eq!(row[0].status, SeatStatus::Sold);
        assert!(row.iter().all(|s| s.row == 8 && s.price == 8));
        assert!(matches!(ledger.seats_in_row(11), Err(LedgerError::OutOfRange { .. })));
    }

    #[test]
    fn statistics_after_first_sale() {
        let mut ledger = SeatingLedger::new(10, 9).unwrap();
        ledger.purchase(1, 1).unwrap();

        let stats = ledger.statistics();
        assert_eq!(stats.sold_count, 1);
        assert_eq!(stats.free_count, 89);
        assert_eq!(stats.current_income, 10);
        assert_eq!(stats.total_possible_income, 810);
        assert_eq!(stats.sold_percentage, 1.11);
    }

    #[test]
    fn total_income_uses_real_seats_per_row() {
        let ledger = SeatingLedger::new(7, 11).unwrap();
        assert_eq!(ledger.statistics().total_possible_income, 3 * 11 * 10 + 4 * 11 * 8);
    }

    #[test]
    fn sold_out_hall() {
        let mut ledger = SeatingLedger::new(2, 2).unwrap();
        for row in 1..=2 {
            for seat in 1..=2 {
                ledger.purchase(row, seat).unwrap();
            }
        }
        assert!(ledger.is_sold_out());
        let stats = ledger.statistics();
        assert_eq!(stats.sold_percentage, 100.0);
        assert_eq!(stats.current_income, stats.total_possible_income);
    }
}
