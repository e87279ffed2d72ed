use crate::domain::transaction::Transaction;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One input row. The currency column may be blank or absent.
#[derive(Debug, Deserialize)]
struct TransactionRecord {
    amount: Decimal,
    #[serde(default)]
    currency: Option<String>,
}

/// Reads transactions from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over `Result<Transaction>`.
/// Rows without a currency are assigned the configured default currency.
pub struct TransactionReader<R: Read> {
    reader: csv::Reader<R>,
    default_currency: String,
}

impl<R: Read> TransactionReader<R> {
    /// Creates a new `TransactionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R, default_currency: impl Into<String>) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self {
            reader,
            default_currency: default_currency.into(),
        }
    }

    /// Returns an iterator that lazily reads and deserializes transactions.
    pub fn transactions(self) -> impl Iterator<Item = Result<Transaction>> {
        let default_currency = self.default_currency;
        self.reader
            .into_deserialize::<TransactionRecord>()
            .map(move |result| -> Result<Transaction> {
                let record = result.map_err(PaymentError::from)?;
                let currency = record
                    .currency
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| default_currency.clone());
                Ok(Transaction::new(record.amount, currency))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "amount, currency\n100, USD\n0.5, EUR";
        let reader = TransactionReader::new(data.as_bytes(), "USD");
        let results: Vec<Result<Transaction>> = reader.transactions().collect();

        assert_eq!(results.len(), 2);
        let tx1 = results[0].as_ref().unwrap();
        assert_eq!(tx1.amount, dec!(100));
        assert_eq!(tx1.currency, "USD");
        let tx2 = results[1].as_ref().unwrap();
        assert_eq!(tx2.amount, dec!(0.5));
        assert_eq!(tx2.currency, "EUR");
    }

    #[test]
    fn test_reader_uses_default_currency() {
        let data = "amount, currency\n25, \n30";
        let reader = TransactionReader::new(data.as_bytes(), "EUR");
        let results: Vec<Transaction> = reader.transactions().map(|r| r.unwrap()).collect();

        assert_eq!(results[0], Transaction::new(dec!(25), "EUR"));
        assert_eq!(results[1], Transaction::new(dec!(30), "EUR"));
    }

    #[test]
    fn test_reader_keeps_negative_amounts() {
        let data = "amount, currency\n-10, USD";
        let reader = TransactionReader::new(data.as_bytes(), "USD");
        let tx = reader.transactions().next().unwrap().unwrap();
        assert_eq!(tx.amount, dec!(-10));
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "amount, currency\nnot_a_number, USD\n5, USD";
        let reader = TransactionReader::new(data.as_bytes(), "USD");
        let results: Vec<Result<Transaction>> = reader.transactions().collect();

        assert!(results[0].is_err());
        assert!(results[1].is_ok());
    }
}
