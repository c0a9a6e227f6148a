//! TUI screens for interactive menus

mod selection_menu;

pub use selection_menu::SelectionMenu;
