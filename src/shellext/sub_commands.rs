use super::ActionCommand;
use crate::registry::ActionCursor;
use std::sync::Mutex;
use windows::{
    Win32::{Foundation::*, UI::Shell::*},
    core::*,
};

/// Enumerator handed to Explorer for the cascade. Wraps a cursor over the
/// registry snapshot; each produced slot is a freshly built [`ActionCommand`].
#[implement(IEnumExplorerCommand)]
pub struct SubCommands {
    cursor: Mutex<ActionCursor>,
}

impl SubCommands {
    pub fn new(cursor: ActionCursor) -> Self {
        Self {
            cursor: Mutex::new(cursor),
        }
    }
}

impl IEnumExplorerCommand_Impl for SubCommands_Impl {
    fn Clone(&self) -> windows::core::Result<IEnumExplorerCommand> {
        tracing::trace!(target: "shellext::sub_commands", "Clone called");
        let cursor = self.cursor.lock().unwrap().clone();
        Ok(ComObject::new(SubCommands::new(cursor)).to_interface())
    }

    fn Next(
        &self,
        count: u32,
        mut commands: *mut Option<IExplorerCommand>,
        fetched: *mut u32,
    ) -> HRESULT {
        tracing::trace!(target: "shellext::sub_commands", count, "Next called");
        if count == 0 {
            if !fetched.is_null() {
                unsafe {
                    fetched.write(0);
                }
            }
            return S_OK;
        }

        if commands.is_null() {
            return E_POINTER;
        }

        let mut cursor = self.cursor.lock().unwrap();
        let batch = cursor.fetch_next(count as usize);
        let produced = batch.items.len() as u32;

        unsafe {
            for action in batch.items {
                commands.write(Some(ActionCommand::new(action).into()));
                commands = commands.add(1);
            }
            // Clear the slots the caller asked for but we did not fill.
            for _ in produced..count {
                commands.write(None);
                commands = commands.add(1);
            }
        }

        if !fetched.is_null() {
            unsafe {
                fetched.write(produced);
            }
        }

        if batch.more { S_OK } else { S_FALSE }
    }

    fn Reset(&self) -> windows::core::Result<()> {
        tracing::trace!(target: "shellext::sub_commands", "Reset called");
        let mut cursor = self.cursor.lock().unwrap();
        cursor.reset();
        Ok(())
    }

    fn Skip(&self, count: u32) -> windows::core::Result<()> {
        tracing::trace!(target: "shellext::sub_commands", count, "Skip called");
        let mut cursor = self.cursor.lock().unwrap();
        cursor.skip(count as usize);
        Ok(())
    }
}
