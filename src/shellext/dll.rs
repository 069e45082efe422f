use super::{CLSID_CONTEXT_MENU_EDIT, ContextMenuEditFactory};
use crate::logging::{LogConfig, LogGuard, init_logging};
use std::ffi::c_void;
use std::ptr::null_mut;
use std::sync::OnceLock;
use windows::{
    Win32::{Foundation::*, System::Com::*},
    core::*,
};

// Keeps the non-blocking writer alive for as long as the module is loaded.
static LOGGING: OnceLock<Option<LogGuard>> = OnceLock::new();

fn ensure_logging() {
    LOGGING.get_or_init(|| match init_logging(LogConfig::default()) {
        Ok(guard) => Some(guard),
        // The extension must keep working without logs.
        Err(_) => None,
    });
}

#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "system" fn DllMain(_module: HMODULE, _reason: u32, _reserved: *mut c_void) -> BOOL {
    TRUE
}

#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "system" fn DllGetClassObject(
    rclsid: *const GUID,
    riid: *const GUID,
    ppv: *mut *mut c_void,
) -> HRESULT {
    ensure_logging();

    unsafe {
        if ppv.is_null() {
            return E_POINTER;
        }
        *ppv = null_mut();

        if rclsid.is_null() || riid.is_null() {
            return E_POINTER;
        }
        if *rclsid != CLSID_CONTEXT_MENU_EDIT {
            return CLASS_E_CLASSNOTAVAILABLE;
        }

        tracing::debug!(target: "shellext::dll", "Class object requested");
        let factory: IClassFactory = ContextMenuEditFactory.into();
        factory.query(riid, ppv)
    }
}

#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "system" fn DllCanUnloadNow() -> HRESULT {
    // Pinned while Explorer runs; unload is handled by process teardown.
    S_FALSE
}
