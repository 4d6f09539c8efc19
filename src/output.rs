//! Envelope output formatting

use std::io;

use crate::envelope::Envelope;

/// Print an envelope as JSON to stdout. Compact by default; `pretty`
/// switches to indented output for console reading.
pub fn print_envelope(envelope: &Envelope, pretty: bool) -> io::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(envelope)
    } else {
        serde_json::to_string(envelope)
    }
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}
