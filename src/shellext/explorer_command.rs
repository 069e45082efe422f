use super::{CANONICAL_COMMAND_GUID, SubCommands, TOP_LEVEL_LABEL};
use crate::registry::ActionRegistry;
use crate::settings::Settings;
use std::ffi::c_void;
use std::sync::Mutex;
use windows::{
    Win32::{Foundation::*, System::Com::*, UI::Shell::*},
    core::*,
};

/// Top-level cascade entry. Owns the action registry snapshot and the host
/// supplied selection; Explorer reaches the actionable leaves through
/// [`EnumSubCommands`](IExplorerCommand_Impl::EnumSubCommands).
#[implement(IExplorerCommand, IObjectWithSelection)]
pub struct ContextMenuEditCommand {
    registry: ActionRegistry,
    selection: Mutex<Option<IShellItemArray>>,
}

impl ContextMenuEditCommand {
    pub fn new() -> Self {
        let registry = match Settings::load() {
            Ok(settings) => settings.registry(),
            Err(e) => {
                tracing::warn!(target: "shellext::explorer_command", error = %e, "Settings unavailable, using built-in actions");
                ActionRegistry::builtin()
            }
        };

        Self {
            registry,
            selection: Mutex::new(None),
        }
    }
}

impl IExplorerCommand_Impl for ContextMenuEditCommand_Impl {
    fn GetTitle(&self, _items: Option<&IShellItemArray>) -> Result<PWSTR> {
        let hstring = HSTRING::from(TOP_LEVEL_LABEL);
        unsafe { SHStrDupW(&hstring) }
    }

    fn GetIcon(&self, _items: Option<&IShellItemArray>) -> Result<PWSTR> {
        // No custom icon; S_FALSE tells the shell to use the default.
        Err(Error::from(S_FALSE))
    }

    fn GetToolTip(&self, _items: Option<&IShellItemArray>) -> Result<PWSTR> {
        Err(Error::from(E_NOTIMPL))
    }

    fn GetCanonicalName(&self) -> Result<GUID> {
        Ok(CANONICAL_COMMAND_GUID)
    }

    fn GetState(&self, _items: Option<&IShellItemArray>, _oktobeslow: BOOL) -> Result<u32> {
        Ok(ECS_ENABLED.0 as u32)
    }

    fn Invoke(
        &self,
        _selection: Option<&IShellItemArray>,
        _bindctx: Option<&IBindCtx>,
    ) -> Result<()> {
        // Cascade mode: the host invokes each subcommand directly, never the parent.
        tracing::debug!(target: "shellext::explorer_command", "Invoke on cascade parent ignored");
        Ok(())
    }

    fn GetFlags(&self) -> Result<u32> {
        Ok(ECF_HASSUBCOMMANDS.0 as u32)
    }

    fn EnumSubCommands(&self) -> Result<IEnumExplorerCommand> {
        tracing::trace!(target: "shellext::explorer_command", actions = self.registry.len(), "EnumSubCommands called");
        Ok(SubCommands::new(self.registry.cursor()).into())
    }
}

impl IObjectWithSelection_Impl for ContextMenuEditCommand_Impl {
    fn SetSelection(&self, psia: Option<&IShellItemArray>) -> Result<()> {
        tracing::trace!(target: "shellext::explorer_command", "SetSelection called");
        let mut selection = self.selection.lock().unwrap();
        *selection = psia.cloned();
        Ok(())
    }

    fn GetSelection(&self, riid: *const GUID, ppv: *mut *mut c_void) -> Result<()> {
        if riid.is_null() || ppv.is_null() {
            return Err(Error::from(E_POINTER));
        }
        unsafe {
            ppv.write(std::ptr::null_mut());
        }

        let selection = self.selection.lock().unwrap();
        match selection.as_ref() {
            Some(items) => unsafe { items.query(riid, ppv).ok() },
            None => Err(Error::from(E_FAIL)),
        }
    }
}
