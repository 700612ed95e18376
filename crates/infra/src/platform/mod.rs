//! Platform adapters
//!
//! Desktop implementation of the clipboard port.

pub mod clipboard;

pub use clipboard::{default_copy_commands, NativeClipboard};
