// src/commander/keys.rs
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};

use crate::error::Result;

pub const ESC: char = '\u{1b}';

pub trait TerminalMode {
    fn is_raw(&self) -> io::Result<bool>;
    fn set_raw(&self, raw: bool) -> io::Result<()>;
}

pub struct CrosstermMode;

impl TerminalMode for CrosstermMode {
    fn is_raw(&self) -> io::Result<bool> {
        is_raw_mode_enabled()
    }

    fn set_raw(&self, raw: bool) -> io::Result<()> {
        if raw {
            enable_raw_mode()
        } else {
            disable_raw_mode()
        }
    }
}

pub trait KeySource {
    fn read(&mut self) -> io::Result<Event>;
    /// Whether another event is already queued.
    fn pending(&mut self) -> io::Result<bool>;
}

pub struct CrosstermEvents;

impl KeySource for CrosstermEvents {
    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }

    fn pending(&mut self) -> io::Result<bool> {
        event::poll(Duration::ZERO)
    }
}

/// Holds the terminal in raw mode; dropping it puts back whatever mode was active before.
pub struct RawModeGuard<M: TerminalMode> {
    mode: M,
    was_raw: bool,
}

impl<M: TerminalMode> RawModeGuard<M> {
    pub fn acquire(mode: M) -> Result<Self> {
        let was_raw = mode.is_raw()?;
        if !was_raw {
            mode.set_raw(true)?;
        }
        Ok(RawModeGuard { mode, was_raw })
    }
}

impl<M: TerminalMode> Drop for RawModeGuard<M> {
    fn drop(&mut self) {
        if !self.was_raw {
            if let Err(e) = self.mode.set_raw(false) {
                tracing::error!(error = %e, "failed to restore terminal mode");
            }
        }
    }
}

/// Blocks for a single key press. No echo, no Enter needed.
pub fn next_key_press() -> Result<char> {
    read_key(CrosstermMode, &mut CrosstermEvents)
}

pub fn read_key<M: TerminalMode, S: KeySource>(mode: M, source: &mut S) -> Result<char> {
    let _raw = RawModeGuard::acquire(mode)?;
    loop {
        if let Event::Key(key) = source.read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(ch) = key_to_char(key) {
                // Typed-ahead keys would otherwise sit in crossterm's queue,
                // invisible to the next line prompt and replayed as menu keys.
                while source.pending()? {
                    source.read()?;
                }
                return Ok(ch);
            }
        }
    }
}

pub fn key_to_char(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Esc => Some(ESC),
        KeyCode::Enter => Some('\r'),
        KeyCode::Tab => Some('\t'),
        KeyCode::Backspace => Some('\u{8}'),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() => {
            Some(((c.to_ascii_lowercase() as u8) - b'a' + 1) as char)
        }
        KeyCode::Char(c) => Some(c),
        _ => None,
    }
}
