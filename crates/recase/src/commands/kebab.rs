//! Kebab command — convert text to kebab-case.
//!
//! Unlike `camel` and `dot`, input is not validated unless `--strict` is
//! given or `strict_kebab` is set in the config.

use clap::Args;
use tracing::{debug, instrument};

use recase_core::Case;

use super::{InputArgs, run_conversions};

/// Arguments for the `kebab` subcommand.
#[derive(Args, Debug)]
pub struct KebabArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Reject empty input and characters outside letters, digits, spaces, `-` and `_`.
    #[arg(long)]
    pub strict: bool,
}

/// Convert each input to kebab-case.
#[instrument(name = "cmd_kebab", skip_all)]
pub fn cmd_kebab(
    args: KebabArgs,
    global_json: bool,
    config_strict: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let strict = args.strict || config_strict;
    debug!(inputs = args.input.text.len(), file = ?args.input.file, strict, "executing kebab command");
    run_conversions(Case::Kebab, &args.input, strict, global_json, max_input_bytes)
}
