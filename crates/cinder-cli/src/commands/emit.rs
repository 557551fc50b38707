//! Emit command
//!
//! Usage: cinder emit --severity <LEVEL> [--join] [MESSAGES]...

use clap::Args;
use cinder_core::LogRecord;

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Severity of the emitted record(s)
    #[arg(long, default_value = "info")]
    pub severity: String,

    /// Stream all messages into a single record instead of one record each
    #[arg(long)]
    pub join: bool,

    /// Message tokens to log
    pub messages: Vec<String>,
}

/// Execute emit command
pub fn execute(args: EmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let severity = super::parse_severity_or_die(&args.severity);

    if args.join {
        let mut record = LogRecord::new(file!(), line!(), severity);
        for message in &args.messages {
            if record.is_enabled() {
                record.append(message);
            }
        }
    } else {
        for message in &args.messages {
            let mut record = LogRecord::new(file!(), line!(), severity);
            if record.is_enabled() {
                record.append(message);
            }
        }
    }

    Ok(())
}
