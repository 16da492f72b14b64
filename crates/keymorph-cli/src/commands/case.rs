//! Convert words between naming conventions

use anyhow::Result;
use keymorph_core::CaseStyle;
use keymorph_core::case::convert;
use std::io::Write;

/// Run the case command, one converted word per line
pub fn run(style: CaseStyle, words: &[String]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for word in words {
        writeln!(stdout, "{}", convert(word, style))?;
    }
    Ok(())
}
