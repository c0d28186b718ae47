use std::io::Read;

use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Open,
    Deposit,
    Withdraw,
    Transfer,
}

#[derive(Debug, Deserialize)]
pub struct Operation {
    #[serde(rename = "op")]
    pub kind: OperationKind,
    pub account: String,
    pub recipient: Option<String>,
    pub amount: Option<Decimal>,
}

/// Parses an operation list in CSV format
///
/// # Panics
///
/// If a row cannot be parsed
pub struct CsvOperationParser<R> {
    iter: DeserializeRecordsIntoIter<R, Operation>,
}

impl<R> CsvOperationParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvOperationParser<R>
where
    R: Read,
{
    type Item = (u64, Operation);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row.unwrap()))
    }
}
