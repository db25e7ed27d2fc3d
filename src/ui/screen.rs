use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

use crate::types::RefreshConfig;

/// Move the cursor home and wipe the visible screen.
pub fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))
}

/// Status line shown while waiting for the next refresh.
pub fn banner(config: &RefreshConfig) -> String {
    format!(
        "Watching {} in namespace {} (Ctrl+C to exit)...",
        config.kind, config.namespace
    )
}
