// Single-key menu commands

pub const MENU_PROMPT: &str = "[A]dd File, [R]emove File, [C]hange CRF, [E]ncode Queue, [Q]uit ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    Remove,
    ChangeCrf,
    Encode,
    Quit,
}

impl MenuCommand {
    /// Only the first non-blank character counts, in either case
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().chars().next()?.to_ascii_lowercase() {
            'a' => Some(MenuCommand::Add),
            'r' => Some(MenuCommand::Remove),
            'c' => Some(MenuCommand::ChangeCrf),
            'e' => Some(MenuCommand::Encode),
            'q' => Some(MenuCommand::Quit),
            _ => None,
        }
    }
}
