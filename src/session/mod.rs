// src/session/mod.rs
pub mod menu;
pub mod resolve;

pub use menu::MenuOption;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use colored::Colorize;

use crate::commander::Commander;
use crate::error::{BrowseError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Browsing,
    Executing(MenuOption),
    Terminated,
}

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub clear_screen: bool,
}

/// Owns the current directory and drives the menu loop.
pub struct BrowserSession<R, W> {
    commander: Arc<dyn Commander>,
    input: R,
    output: W,
    current_dir: PathBuf,
    state: SessionState,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> BrowserSession<R, W> {
    pub fn new(commander: Arc<dyn Commander>, start_dir: PathBuf, input: R, output: W) -> Self {
        BrowserSession {
            commander,
            input,
            output,
            current_dir: start_dir,
            state: SessionState::Browsing,
            options: SessionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn run(&mut self) -> Result<()> {
        tracing::info!(dir = %self.current_dir.display(), "session started");

        while self.state != SessionState::Terminated {
            self.render()?;
            let option = self.read_menu_option()?;

            if option == MenuOption::Quit {
                self.state = SessionState::Terminated;
                break;
            }

            self.state = SessionState::Executing(option);
            tracing::info!(?option, "executing");
            if self.options.clear_screen {
                self.output.flush()?;
                self.commander.clear_screen();
            }
            writeln!(self.output, "\n{}", option.menu_line())?;

            match self.execute(option) {
                Ok(()) => {}
                Err(e) if e.is_recoverable() => {
                    tracing::warn!(?option, error = %e, "action aborted");
                    self.report_error(&e.to_string())?;
                }
                Err(e) => return Err(e),
            }
            self.state = SessionState::Browsing;
        }

        tracing::info!("session terminated");
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.output.flush()?;
        if let Err(e) = self.commander.list_directory(&self.current_dir) {
            tracing::warn!(dir = %self.current_dir.display(), error = %e, "listing failed");
            writeln!(self.output, "{}", e.to_string().red())?;
        }

        writeln!(self.output)?;
        for option in MenuOption::ALL {
            writeln!(self.output, "{} - {}", option.key_label().bold(), option.label())?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn read_menu_option(&mut self) -> Result<MenuOption> {
        loop {
            let key = self.commander.next_key_press()?;
            if let Some(option) = MenuOption::from_key(key) {
                return Ok(option);
            }
        }
    }

    fn execute(&mut self, option: MenuOption) -> Result<()> {
        match option {
            MenuOption::ChangeDirectory => self.change_directory(),
            MenuOption::Copy => {
                let (source, destination) = self.prompt_transfer("copy")?;
                self.commander.copy_file(&source, &destination)
            }
            MenuOption::MoveRename => {
                let (source, destination) = self.prompt_transfer("move/rename")?;
                self.commander.move_file(&source, &destination)
            }
            MenuOption::Delete => {
                let path = self.prompt_existing_file("Enter the name of the file to delete:")?;
                self.commander.delete_file(&path)
            }
            MenuOption::Quit => Ok(()),
        }
    }

    fn change_directory(&mut self) -> Result<()> {
        let raw = self.prompt("Enter the path where to navigate:")?;

        match raw.as_str() {
            "." => {}
            ".." => {
                self.current_dir = resolve::parent_of(&self.current_dir);
                self.report_status("Navigated to parent directory")?;
            }
            _ => match resolve::resolve_directory(&self.current_dir, &raw) {
                Some(dir) => {
                    self.current_dir = dir;
                    let msg = format!("Navigated to {}", self.current_dir.display());
                    self.report_status(&msg)?;
                }
                None => {
                    tracing::warn!(input = %raw, "invalid directory");
                    self.report_error(&format!("Invalid directory: {}", raw))?;
                }
            },
        }
        Ok(())
    }

    // Both prompts must succeed before anything touches the filesystem.
    fn prompt_transfer(&mut self, verb: &str) -> Result<(PathBuf, PathBuf)> {
        let source = self.prompt_existing_file(&format!("Enter the name of the file to {}:", verb))?;
        let raw = self.prompt("Enter the path to destination:")?;
        let destination = resolve::resolve_free_path(&self.current_dir, &raw)?;
        tracing::debug!(source = %source.display(), destination = %destination.display(), "transfer resolved");
        Ok((source, destination))
    }

    fn prompt_existing_file(&mut self, message: &str) -> Result<PathBuf> {
        let raw = self.prompt(message)?;
        resolve::resolve_existing_file(&self.current_dir, &raw)
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BrowseError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn report_status(&mut self, msg: &str) -> Result<()> {
        tracing::info!(dir = %self.current_dir.display(), "{}", msg);
        writeln!(self.output, "\n{}", msg.green())?;
        Ok(())
    }

    fn report_error(&mut self, msg: &str) -> Result<()> {
        writeln!(self.output, "{}", msg.red())?;
        Ok(())
    }
}
