// src/session/menu.rs
use crate::commander::keys::ESC;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ChangeDirectory,
    Copy,
    MoveRename,
    Delete,
    Quit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 5] = [
        MenuOption::ChangeDirectory,
        MenuOption::Copy,
        MenuOption::MoveRename,
        MenuOption::Delete,
        MenuOption::Quit,
    ];

    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(MenuOption::ChangeDirectory),
            '2' => Some(MenuOption::Copy),
            '3' => Some(MenuOption::MoveRename),
            '4' => Some(MenuOption::Delete),
            ESC => Some(MenuOption::Quit),
            _ => None,
        }
    }

    pub fn key_label(self) -> &'static str {
        match self {
            MenuOption::ChangeDirectory => "1",
            MenuOption::Copy => "2",
            MenuOption::MoveRename => "3",
            MenuOption::Delete => "4",
            MenuOption::Quit => "ESC",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::ChangeDirectory => "Change directory",
            MenuOption::Copy => "Copy file",
            MenuOption::MoveRename => "Move/rename file",
            MenuOption::Delete => "Delete file",
            MenuOption::Quit => "Quit",
        }
    }

    pub fn menu_line(self) -> String {
        format!("{} - {}", self.key_label(), self.label())
    }
}
