// Context menu handler for Windows Explorer
// COM objects served in-process to add the cascading "Context Menu Edit" entry

mod action_command;
mod dll;
mod explorer_command;
mod factory;
mod sub_commands;

pub use action_command::ActionCommand;
pub use explorer_command::ContextMenuEditCommand;
pub use factory::ContextMenuEditFactory;
pub use sub_commands::SubCommands;

use windows::core::GUID;

/// Class id Explorer binds to; must match the shell registration.
pub const CLSID_CONTEXT_MENU_EDIT: GUID = GUID::from_u128(0xe5b37d79_4dda_4a78_b2c9_7b1e1fb1e4a4);

/// Canonical name reported for the top-level command. Leaf commands report
/// none, which is the stated behavior, not an oversight to fix here.
pub const CANONICAL_COMMAND_GUID: GUID = GUID::from_u128(0x6b6f26f1_9b3f_4f5f_a537_13567b1b33a1);

/// Display label of the top-level entry.
pub const TOP_LEVEL_LABEL: &str = "Context Menu Edit";
