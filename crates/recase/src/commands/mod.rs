//! Command implementations.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::{OwoColorize, Stream};
use tracing::debug;

use recase_core::{Case, Conversion};

pub mod camel;
pub mod convert;
pub mod dot;
pub mod info;
pub mod kebab;
#[cfg(feature = "mcp")]
pub mod serve;

/// Input selection shared by the conversion commands.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Text to convert (one conversion per argument).
    #[arg(required_unless_present = "file", value_name = "TEXT")]
    pub text: Vec<String>,

    /// Convert each non-blank line of FILE instead of arguments.
    #[arg(short, long, conflicts_with = "text", value_name = "FILE")]
    pub file: Option<Utf8PathBuf>,

    /// Parse each input as a JSON value; non-string values are rejected.
    #[arg(long)]
    pub json_input: bool,
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Collect the raw inputs named by `args`.
pub fn collect_inputs(args: &InputArgs, max_bytes: Option<usize>) -> anyhow::Result<Vec<String>> {
    match args.file {
        Some(ref path) => {
            let content = read_input_file(path, max_bytes)?;
            Ok(content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect())
        }
        None => Ok(args.text.clone()),
    }
}

/// Convert every input to `case` and print the results.
///
/// Successful conversions go to stdout one per line; failures are reported
/// on stderr as `Error: <message>`. With `json`, a single array of
/// [`Conversion`] records is printed instead. Returns an error if any input
/// failed, after everything has been printed.
pub fn run_conversions(
    case: Case,
    args: &InputArgs,
    strict_kebab: bool,
    json: bool,
    max_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let inputs = collect_inputs(args, max_bytes)?;
    debug!(%case, count = inputs.len(), strict_kebab, json_input = args.json_input, "converting inputs");

    let mut conversions = Vec::with_capacity(inputs.len());
    for (idx, raw) in inputs.into_iter().enumerate() {
        let result = if args.json_input {
            let value: serde_json::Value = serde_json::from_str(&raw)
                .with_context(|| format!("input {} is not valid JSON: {raw}", idx + 1))?;
            case.convert_value(&value, strict_kebab)
        } else {
            case.convert(&raw, strict_kebab)
        };
        conversions.push(Conversion::new(raw, case, result));
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&conversions)?);
    } else {
        for conversion in &conversions {
            match (&conversion.output, &conversion.error) {
                (Some(output), _) => println!("{output}"),
                (None, Some(error)) => eprintln!(
                    "{} {error}",
                    "Error:".if_supports_color(Stream::Stderr, |t| t.red())
                ),
                (None, None) => {}
            }
        }
    }

    let failed = conversions.iter().filter(|c| !c.is_ok()).count();
    if failed > 0 {
        bail!(
            "{failed} of {} input(s) could not be converted to {case}",
            conversions.len()
        );
    }
    Ok(())
}
