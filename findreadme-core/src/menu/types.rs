use crate::constants::EXIT_LABEL;

/// What a menu option stands for. The menu never interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    /// Payload is something the caller will execute or open
    Command,
    /// Kind carried by the exit sentinel
    ExitMenu,
    /// Any other caller-defined kind
    Custom(String),
}

/// A single selectable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub kind: OptionKind,
    pub payload: String,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, kind: OptionKind, payload: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind,
            payload: payload.into(),
        }
    }

    pub fn command(label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self::new(label, OptionKind::Command, payload)
    }
}

/// Everything needed to show one menu.
///
/// Option order is the display order; an option's index is its identity
/// during navigation. An empty option list is valid and leaves only the
/// trailing exit entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDescription {
    pub title: String,
    pub subtitle: String,
    pub options: Vec<MenuOption>,
    pub parent: Option<String>,
}

impl MenuDescription {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        options: Vec<MenuOption>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            options,
            parent: None,
        }
    }

    /// Turn the exit entry into a "return to previous menu" entry
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Number of real options, which is also the index of the exit entry
    pub fn exit_index(&self) -> usize {
        self.options.len()
    }

    pub fn exit_label(&self) -> String {
        match &self.parent {
            Some(parent) => format!("Return to previous menu ({parent})"),
            None => EXIT_LABEL.to_string(),
        }
    }
}

/// Outcome of one menu display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuResult {
    Selected { index: usize, option: MenuOption },
    Exit,
}

impl MenuResult {
    pub fn is_exit(&self) -> bool {
        matches!(self, MenuResult::Exit)
    }

    pub fn label(&self) -> &str {
        match self {
            MenuResult::Selected { option, .. } => &option.label,
            MenuResult::Exit => EXIT_LABEL,
        }
    }

    pub fn kind(&self) -> OptionKind {
        match self {
            MenuResult::Selected { option, .. } => option.kind.clone(),
            MenuResult::Exit => OptionKind::ExitMenu,
        }
    }

    pub fn option(&self) -> Option<&MenuOption> {
        match self {
            MenuResult::Selected { option, .. } => Some(option),
            MenuResult::Exit => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            MenuResult::Selected { index, .. } => Some(*index),
            MenuResult::Exit => None,
        }
    }
}
