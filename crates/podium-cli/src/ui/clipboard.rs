//! Best-effort clipboard access.
//!
//! The system clipboard (arboard) is the primary path; when it is
//! unavailable (headless session, no display server) the OSC 52 escape
//! sequence asks the terminal emulator itself to store the text.
//! Neither path surfaces an error to the caller: the result is a bool
//! the status bar turns into a transient notification.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

pub fn copy_best_effort(text: &str) -> bool {
    if copy_system(text) {
        return true;
    }
    copy_osc52(text).is_ok()
}

fn copy_system(text: &str) -> bool {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => clipboard.set_text(text.to_string()).is_ok(),
        Err(_) => false,
    }
}

/// OSC 52: `ESC ] 52 ; c ; <base64> BEL`. Support depends on the
/// terminal emulator; failure here only means the write itself failed.
fn copy_osc52(text: &str) -> io::Result<()> {
    let payload = STANDARD.encode(text.as_bytes());
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]52;c;{}\x07", payload)?;
    stdout.flush()
}
