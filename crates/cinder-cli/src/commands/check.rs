//! Check command
//!
//! Usage: cinder check --expect <N> --actual <M> [--debug-only]

use clap::Args;
use cinder_core::{cinder_check_eq, cinder_dcheck_eq};

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Expected value
    #[arg(long)]
    pub expect: i64,

    /// Actual value
    #[arg(long)]
    pub actual: i64,

    /// Make the comparison a debug-build-only check
    #[arg(long)]
    pub debug_only: bool,
}

/// Execute check command
pub fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.debug_only {
        cinder_dcheck_eq!(args.expect, args.actual);
    } else {
        cinder_check_eq!(args.expect, args.actual);
    }

    println!("check passed");
    Ok(())
}
