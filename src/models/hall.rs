use validator::Validate;

/// Размеры зала, как их ввёл оператор.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct HallDimensions {
    #[validate(range(min = 1))]
    pub rows: usize,
    #[validate(range(min = 1))]
    pub seats_per_row: usize,
}

impl HallDimensions {
    pub fn new(rows: usize, seats_per_row: usize) -> Self {
        Self { rows, seats_per_row }
    }
}
