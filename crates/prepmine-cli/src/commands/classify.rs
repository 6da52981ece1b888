//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, formatter: &Formatter) -> Result<()> {
    if args.question.trim().is_empty() {
        return Err(CliError::InvalidInput("Question must not be empty".into()));
    }

    let category = prepmine_classifier::classify(&args.question);
    println!("{}", formatter.format_classification(&args.question, category)?);

    Ok(())
}
