//! Extract command implementation.

use crate::cli::{ExtractArgs, MethodArg};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use prepmine_domain::ExtractionMethod;
use prepmine_extractor::run_pipeline;
use prepmine_llm::GeminiProvider;
use prepmine_store::{save_json, save_report, ReviewStore};
use std::fs;

/// Execute the extract command.
pub async fn execute_extract(
    args: ExtractArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let store = ReviewStore::load(&args.input)?;

    let mut extraction = config.extraction.clone();
    if let Some(model) = args.model {
        extraction.model = model;
    }
    if args.fallback {
        extraction.fallback_to_keyword = true;
    }

    let method: ExtractionMethod = args.method.into();

    // The keyword path never touches the provider, so a key is only
    // required for AI runs
    let api_key = match (args.method, args.api_key) {
        (MethodArg::Keyword, _) => String::new(),
        (MethodArg::Ai, Some(key)) => key,
        (MethodArg::Ai, None) => return Err(CliError::MissingApiKey),
    };

    let provider =
        GeminiProvider::new(api_key).map_err(|e| CliError::Config(e.to_string()))?;
    let report = run_pipeline(store.reviews(), provider, method, &extraction).await?;

    fs::create_dir_all(&args.output_dir)?;
    let stem = format!("questions_{}", report.result.metadata.run_id);
    let json_path = args.output_dir.join(format!("{}.json", stem));
    let txt_path = args.output_dir.join(format!("{}.txt", stem));
    save_json(&report.result, &json_path)?;
    save_report(&report.result, &txt_path)?;

    println!("{}", formatter.format_report(&report)?);
    println!("Results written to {} and {}", json_path.display(), txt_path.display());

    Ok(())
}
