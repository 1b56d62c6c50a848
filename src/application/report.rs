//! # Report
//!
//! Writes the human-readable output of a session: the tool listing followed by
//! one section per tool call.

use std::io::{self, Write};

use crate::domain::types::CapabilityDescriptor;
use crate::strings::messages;

pub fn write_tools<W: Write>(out: &mut W, tools: &[CapabilityDescriptor]) -> io::Result<()> {
    writeln!(out, "{}", messages::TOOLS_HEADER)?;
    for tool in tools {
        writeln!(out, "{}", messages::tool_entry(&tool.name, &tool.description))?;
    }
    Ok(())
}

/// A blank line, the heading, then the body.
pub fn write_section<W: Write>(out: &mut W, heading: &str, body: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{heading}")?;
    writeln!(out, "{body}")?;
    out.flush()
}
