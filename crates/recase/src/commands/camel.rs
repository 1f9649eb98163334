//! Camel command — convert text to camelCase.

use clap::Args;
use tracing::{debug, instrument};

use recase_core::Case;

use super::{InputArgs, run_conversions};

/// Arguments for the `camel` subcommand.
#[derive(Args, Debug)]
pub struct CamelArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Convert each input to camelCase.
#[instrument(name = "cmd_camel", skip_all)]
pub fn cmd_camel(
    args: CamelArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(inputs = args.input.text.len(), file = ?args.input.file, "executing camel command");
    run_conversions(Case::Camel, &args.input, false, global_json, max_input_bytes)
}
