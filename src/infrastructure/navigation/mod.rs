//! Navigation targets.

mod terminal_navigator;

pub use terminal_navigator::TerminalNavigator;
