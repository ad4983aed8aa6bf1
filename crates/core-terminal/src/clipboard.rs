//! System clipboard over OSC 52.
//!
//! The terminal (or multiplexer) owns the clipboard; we only emit
//! `ESC ] 52 ; c ; <base64> ESC \`. There is no acknowledgement, so a write
//! that reached stdout counts as success. Payloads are never logged, only
//! their length.

use anyhow::{Result, bail};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::io::{Write, stdout};
use tracing::debug;

/// Largest payload sent; many terminals drop longer OSC 52 sequences.
pub const MAX_OSC52_BYTES: usize = 100_000;

pub fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// Write the OSC 52 sequence for `text` to `out`.
pub fn write_osc52<W: Write>(out: &mut W, text: &str) -> Result<()> {
    if text.len() > MAX_OSC52_BYTES {
        bail!(
            "clipboard payload of {} bytes exceeds the {} byte limit",
            text.len(),
            MAX_OSC52_BYTES
        );
    }
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()?;
    debug!(target: "clipboard", bytes = text.len(), "osc52_written");
    Ok(())
}

pub fn copy_osc52(text: &str) -> Result<()> {
    let mut out = stdout();
    write_osc52(&mut out, text)
}
