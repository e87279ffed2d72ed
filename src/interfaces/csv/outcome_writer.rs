use crate::domain::outcome::ProcessOutcome;
use crate::domain::transaction::Transaction;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

/// One output row: the input transaction and what happened to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeRow {
    pub amount: Decimal,
    pub currency: String,
    pub status: &'static str,
    pub processor: Option<String>,
    pub transaction_id: Option<String>,
    pub message: Option<String>,
}

impl OutcomeRow {
    pub fn new(tx: &Transaction, outcome: ProcessOutcome) -> Self {
        let status = outcome.status();
        let (processor, transaction_id, message) = match outcome {
            ProcessOutcome::Success {
                processor,
                transaction_id,
            } => (Some(processor), Some(transaction_id), None),
            ProcessOutcome::Error { message } => (None, None, Some(message)),
        };
        Self {
            amount: tx.amount,
            currency: tx.currency.clone(),
            status,
            processor,
            transaction_id,
            message,
        }
    }

    /// A row for a transaction that could not be dispatched at all.
    pub fn failed(tx: &Transaction, error: &PaymentError) -> Self {
        Self::new(tx, ProcessOutcome::error(error.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Writes outcome rows as CSV or as JSON lines.
pub struct OutcomeWriter<W: Write> {
    sink: Sink<W>,
}

enum Sink<W: Write> {
    Csv(csv::Writer<W>),
    Json(W),
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(destination: W, format: OutputFormat) -> Self {
        let sink = match format {
            OutputFormat::Csv => Sink::Csv(csv::Writer::from_writer(destination)),
            OutputFormat::Json => Sink::Json(destination),
        };
        Self { sink }
    }

    pub fn write(&mut self, row: &OutcomeRow) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.serialize(row)?,
            Sink::Json(writer) => {
                serde_json::to_writer(&mut *writer, row)?;
                writer.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.flush()?,
            Sink::Json(writer) => writer.flush()?,
        }
        Ok(())
    }
}
