//! Launch at login through `SMAppService.mainAppService` (macOS 13+).

use crate::error::{Error, Result};
use crate::platform::macos::ffi::bridge::{
    id, msg_send, nil, string_from_nsstring, AnyClass, Bool,
};

/// Register (`true`) or unregister the app as a login item.
///
/// # Safety
/// Main thread only.
pub unsafe fn set_launch_at_login(enabled: bool) -> Result<()> {
    let cls = AnyClass::get(c"SMAppService")
        .ok_or_else(|| Error::LoginItem("SMAppService unavailable".into()))?;
    let service: id = msg_send![cls, mainAppService];
    if service == nil {
        return Err(Error::LoginItem("no main app service".into()));
    }

    let mut err: id = nil;
    let ok: Bool = if enabled {
        msg_send![service, registerAndReturnError: &mut err as *mut id]
    } else {
        msg_send![service, unregisterAndReturnError: &mut err as *mut id]
    };
    if ok.as_bool() {
        tracing::info!(enabled, "login item updated");
        return Ok(());
    }

    let reason = if err == nil {
        "unknown error".to_string()
    } else {
        let desc: id = msg_send![err, localizedDescription];
        string_from_nsstring(desc).unwrap_or_else(|| "unknown error".to_string())
    };
    Err(Error::LoginItem(reason))
}
