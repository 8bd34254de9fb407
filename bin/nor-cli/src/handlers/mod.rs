pub(crate) mod apply;
pub(crate) mod init;
pub(crate) mod summary;

use serde::Serialize;

/// Prints a value as a single line of JSON.
pub(crate) fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
