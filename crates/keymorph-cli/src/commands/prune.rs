//! Prune empty values from a document

use anyhow::{Context, Result};

use crate::document;

/// Run the prune command
pub fn run(input: Option<&str>, pretty: bool) -> Result<()> {
    let node = document::read(input)?;
    let output = keymorph_core::prune(node).context("Prune failed")?;
    document::write(&output, pretty)
}
