//! Dot command — convert text to dot.case.

use clap::Args;
use tracing::{debug, instrument};

use recase_core::Case;

use super::{InputArgs, run_conversions};

/// Arguments for the `dot` subcommand.
#[derive(Args, Debug)]
pub struct DotArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Convert each input to dot.case.
#[instrument(name = "cmd_dot", skip_all)]
pub fn cmd_dot(args: DotArgs, global_json: bool, max_input_bytes: Option<usize>) -> anyhow::Result<()> {
    debug!(inputs = args.input.text.len(), file = ?args.input.file, "executing dot command");
    run_conversions(Case::Dot, &args.input, false, global_json, max_input_bytes)
}
