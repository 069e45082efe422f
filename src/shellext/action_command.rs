use crate::registry::ActionItem;
use crate::state::{MenuState, visibility};
use windows::{
    Win32::{
        Foundation::*,
        System::Com::*,
        UI::Input::KeyboardAndMouse::{GetKeyState, VK_SHIFT},
        UI::Shell::*,
    },
    core::*,
};

/// Leaf command for one configured action. Holds its own copy of the action
/// data, so it outlives the parent and the enumerator that produced it.
#[implement(IExplorerCommand)]
pub struct ActionCommand {
    action: ActionItem,
}

impl ActionCommand {
    pub fn new(action: ActionItem) -> Self {
        Self { action }
    }
}

fn shift_held() -> bool {
    unsafe { (GetKeyState(VK_SHIFT.0 as i32) as u16 & 0x8000) != 0 }
}

impl IExplorerCommand_Impl for ActionCommand_Impl {
    fn GetTitle(&self, _items: Option<&IShellItemArray>) -> Result<PWSTR> {
        let hstring = HSTRING::from(self.action.label.as_str());
        unsafe { SHStrDupW(&hstring) }
    }

    fn GetIcon(&self, _items: Option<&IShellItemArray>) -> Result<PWSTR> {
        if self.action.icon.is_empty() {
            // S_FALSE tells the shell to use the default icon.
            return Err(Error::from(S_FALSE));
        }
        let hstring = HSTRING::from(self.action.icon.as_str());
        unsafe { SHStrDupW(&hstring) }
    }

    fn GetToolTip(&self, _items: Option<&IShellItemArray>) -> Result<PWSTR> {
        Err(Error::from(E_NOTIMPL))
    }

    fn GetCanonicalName(&self) -> Result<GUID> {
        // Leaves carry no canonical name, unlike the parent.
        Ok(GUID::zeroed())
    }

    fn GetState(&self, _items: Option<&IShellItemArray>, _oktobeslow: BOOL) -> Result<u32> {
        // Re-read the modifier on every query; the menu asks again after
        // Shift changes.
        let state = match visibility(self.action.extended_only, shift_held()) {
            MenuState::Enabled => ECS_ENABLED,
            MenuState::Hidden => ECS_HIDDEN,
        };
        tracing::trace!(target: "shellext::action_command", id = %self.action.id, state = state.0, "GetState called");
        Ok(state.0 as u32)
    }

    fn Invoke(
        &self,
        _selection: Option<&IShellItemArray>,
        _bindctx: Option<&IBindCtx>,
    ) -> Result<()> {
        Err(Error::from(E_NOTIMPL))
    }

    fn GetFlags(&self) -> Result<u32> {
        Ok(ECF_DEFAULT.0 as u32)
    }

    fn EnumSubCommands(&self) -> Result<IEnumExplorerCommand> {
        Err(Error::from(E_NOTIMPL))
    }
}
