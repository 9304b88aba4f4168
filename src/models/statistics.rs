use serde::Serialize;

/// Сводка продаж по залу.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_seats: usize,
    pub sold_count: usize,
    pub free_count: usize,
    /// Доля проданных мест в процентах, округлена до двух знаков.
    pub sold_percentage: f64,
    pub current_income: u64,
    pub total_possible_income: u64,
}
