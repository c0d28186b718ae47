use std::fs::File;

use anyhow::{Context, Result};
use tiny_bank::bin_utils::{OperationError, Service};

fn main() -> Result<()> {
    let filename = std::env::args()
        .nth(1)
        .context("Expected a file name as the first argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| {
            match err {
                OperationError::Bank(_) => {
                    // rejected by the bank itself, not a technical error,
                    // so we don't need to print them
                }
                err => eprintln!("Error at line {line}: {err}"),
            }
        }),
    };
    let total = service.run()?;
    eprintln!("Total bank balance: {total}");
    Ok(())
}
