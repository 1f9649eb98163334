//! Convert command — convert text to a case picked at runtime.

use clap::Args;
use tracing::{debug, instrument};

use recase_core::{Case, Config};

use super::{InputArgs, run_conversions};

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Target case (defaults to `default_case` from config, then camel).
    #[arg(short, long, value_enum)]
    pub to: Option<Case>,

    /// Validate input for kebab-case as well.
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Convert each input to the requested case.
#[instrument(name = "cmd_convert", skip_all)]
pub fn cmd_convert(
    args: ConvertArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let case = args.to.or(config.default_case).unwrap_or_default();
    let strict = args.strict || config.strict_kebab;
    debug!(%case, strict, inputs = args.input.text.len(), "executing convert command");
    run_conversions(case, &args.input, strict, global_json, max_input_bytes)
}
