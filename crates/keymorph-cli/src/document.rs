//! Reading and writing JSON documents

use anyhow::{Context, Result};
use keymorph_core::Node;
use std::io::{Read, Write};

/// Read a JSON document from `path`, or from stdin when `path` is `None` or `-`
pub fn read(path: Option<&str>) -> Result<Node> {
    let contents = match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
        Some(path) => {
            tracing::debug!("Reading document from {}", path);
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?
        }
    };

    let value: serde_json::Value =
        serde_json::from_str(&contents).context("Input is not valid JSON")?;
    Ok(Node::from(value))
}

/// Write `node` to stdout as JSON
pub fn write(node: &Node, pretty: bool) -> Result<()> {
    let value = node.to_json();
    let rendered = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered).context("Failed to write output")?;
    Ok(())
}
