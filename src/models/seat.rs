use std::fmt;

/// Состояние одного места в зале.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeatStatus {
    #[default]
    Free,
    Sold,
}

impl SeatStatus {
    /// Символ, которым место рисуется на схеме зала.
    pub fn symbol(self) -> char {
        match self {
            SeatStatus::Free => 'S',
            SeatStatus::Sold => 'B',
        }
    }

    pub fn is_sold(self) -> bool {
        self == SeatStatus::Sold
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub row: usize,
    pub number: usize,
    pub status: SeatStatus,
    pub price: u32,
}
