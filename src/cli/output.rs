//! Printing of `check` and `show` results.

use serde::Serialize;

/// Result of a command, printable for a terminal or as JSON with `--json`
pub trait CommandOutput: Serialize {
    /// Plain text shown on stdout
    fn to_human(&self) -> String;
    /// Machine-readable form printed in `--json` mode
    fn to_json(&self) -> serde_json::Value;
}

/// Print `result` to stdout in the requested mode
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    let rendered = if json_mode {
        serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
    } else {
        result.to_human()
    };
    println!("{rendered}");
}
