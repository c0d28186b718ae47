use std::io::Write;

use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

/// One line of the final balance report.
#[derive(Debug, Serialize)]
pub struct AccountRow {
    pub name: String,
    pub balance: Decimal,
}

pub fn print_accounts<W>(
    output: &mut W,
    accounts: impl Iterator<Item = AccountRow>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for row in accounts {
        if let Err(err) = writer.serialize(row) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
