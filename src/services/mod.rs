pub mod ledger;

pub use ledger::SeatingLedger;
