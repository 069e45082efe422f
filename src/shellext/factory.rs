use super::ContextMenuEditCommand;
use windows::{
    Win32::{Foundation::*, System::Com::*},
    core::*,
};

// Class factory for creating instances of the context menu handler
#[implement(IClassFactory)]
pub struct ContextMenuEditFactory;

impl IClassFactory_Impl for ContextMenuEditFactory_Impl {
    fn CreateInstance(
        &self,
        outer: Option<&IUnknown>,
        iid: *const GUID,
        result: *mut *mut core::ffi::c_void,
    ) -> Result<()> {
        if outer.is_some() {
            return Err(Error::from(CLASS_E_NOAGGREGATION));
        }
        if iid.is_null() || result.is_null() {
            return Err(Error::from(E_POINTER));
        }

        let handler = ContextMenuEditCommand::new();
        let handler: IUnknown = handler.into();

        unsafe { handler.query(iid, result).ok() }
    }

    fn LockServer(&self, _lock: BOOL) -> Result<()> {
        Ok(())
    }
}
