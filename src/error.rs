use thiserror::Error;

/// Failures reported by the seating ledger.
///
/// The display strings of the recoverable kinds are exactly what the menu
/// prints back to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("hall dimensions must be positive, got {rows} rows x {seats_per_row} seats")]
    InvalidDimension { rows: usize, seats_per_row: usize },

    #[error("Wrong input!")]
    OutOfRange { row: usize, seat: usize },

    #[error("That ticket has already been purchased!")]
    AlreadySold { row: usize, seat: usize },
}

