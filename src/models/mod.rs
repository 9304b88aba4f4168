pub mod hall;
pub mod seat;
pub mod statistics;

pub use hall::HallDimensions;
pub use seat::{Seat, SeatStatus};
pub use statistics::Statistics;
