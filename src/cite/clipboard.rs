// src/cite/clipboard.rs
// =============================================================================
// This module copies a citation string to the system clipboard.
//
// There's no portable clipboard syscall, so we pipe the text into the first
// clipboard command that works, newest to oldest:
//   pbcopy (macOS) -> wl-copy (Wayland) -> xclip / xsel (X11)
//
// A copy failure is never fatal: the caller reports it and moves on. The
// citation was printed to stdout anyway.
//
// Rust concepts:
// - std::process::Command with piped stdin
// - Typed errors that the caller handles locally instead of propagating
// =============================================================================

use std::io::Write;
use std::process::{Command, Stdio};
use thiserror::Error;

// Clipboard commands to try, in order, with the arguments each one needs
// to target the actual clipboard (not the X11 primary selection).
const BACKENDS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// Copying an empty string is refused rather than silently "succeeding"
    #[error("nothing to copy")]
    Empty,
    /// Every backend either wasn't installed or exited with failure
    #[error("no working clipboard command found (tried pbcopy, wl-copy, xclip, xsel)")]
    NoBackend,
}

// Writes text to the system clipboard
//
// Tries each backend until one takes the text. Backends that aren't
// installed fail to spawn and we just move to the next.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    if text.is_empty() {
        return Err(ClipboardError::Empty);
    }

    for (command, args) in BACKENDS {
        if pipe_to_command(command, args, text).is_ok() {
            return Ok(());
        }
    }

    Err(ClipboardError::NoBackend)
}

// Spawns one clipboard command and feeds it the text on stdin
fn pipe_to_command(command: &str, args: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(command)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Scope the handle so stdin closes before we wait, or the child
    // keeps reading forever
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("{} exited with {}", command, status),
        ))
    }
}
