//! Report command implementation.

use crate::cli::ReportArgs;
use crate::error::Result;
use crate::output::Formatter;
use prepmine_domain::CategorizedResult;
use std::fs;

/// Execute the report command.
pub fn execute_report(args: ReportArgs, formatter: &Formatter) -> Result<()> {
    let contents = fs::read_to_string(&args.input)?;
    let result: CategorizedResult = serde_json::from_str(&contents)?;

    println!("{}", formatter.format_stored_result(&result)?);

    Ok(())
}
