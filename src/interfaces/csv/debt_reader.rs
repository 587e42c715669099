use crate::domain::debt::Debt;
use crate::error::{Result, SettlementError};
use std::io::Read;

/// Reads debts from a CSV source with an `id,balance` header.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<Debt>`, handling
/// whitespace trimming and flexible record lengths automatically so large
/// files can be streamed without loading everything into memory.
pub struct DebtReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> DebtReader<R> {
    /// Creates a new `DebtReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn debts(self) -> impl Iterator<Item = Result<Debt>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(SettlementError::from))
    }
}
