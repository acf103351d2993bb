//! NSWorkspace and NSBundle: app icons, names and launching.

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::app_display_name;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, string_from_nsstring, NSSize,
};

unsafe fn shared_workspace() -> id {
    msg_send![get_class("NSWorkspace"), sharedWorkspace]
}

/// Icon for the bundle at `path`, scaled to `size`. Retained (+1), or nil.
///
/// # Safety
/// Main thread only. The caller owns the returned image.
pub unsafe fn icon_for_path(path: &Path, size: f64) -> id {
    let ws = shared_workspace();
    let icon: id = msg_send![ws, iconForFile: nsstring_id(&path.to_string_lossy())];
    if icon == nil {
        return nil;
    }
    let icon: id = msg_send![icon, copy];
    let _: () = msg_send![icon, setSize: NSSize::new(size, size)];
    icon
}

/// `CFBundleName` from the bundle's Info.plist, else the file stem.
pub fn bundle_display_name(path: &Path) -> String {
    let name = unsafe {
        let bundle: id = msg_send![
            get_class("NSBundle"),
            bundleWithPath: nsstring_id(&path.to_string_lossy())
        ];
        if bundle == nil {
            None
        } else {
            let value: id =
                msg_send![bundle, objectForInfoDictionaryKey: nsstring_id("CFBundleName")];
            if value == nil {
                None
            } else {
                let is_string: bool = msg_send![value, isKindOfClass: get_class("NSString")];
                if is_string {
                    string_from_nsstring(value)
                } else {
                    None
                }
            }
        }
    };
    name.filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| app_display_name(path))
}

/// Ask the OS to open the application bundle at `path`.
///
/// # Safety
/// Main thread only.
pub unsafe fn open_application(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(Error::Launch {
            path: path.to_path_buf(),
            reason: "bundle no longer exists".into(),
        });
    }
    let url: id = msg_send![
        get_class("NSURL"),
        fileURLWithPath: nsstring_id(&path.to_string_lossy())
    ];
    if url == nil {
        return Err(Error::Launch {
            path: path.to_path_buf(),
            reason: "invalid file URL".into(),
        });
    }
    let opened: bool = msg_send![shared_workspace(), openURL: url];
    if opened {
        Ok(())
    } else {
        Err(Error::Launch {
            path: path.to_path_buf(),
            reason: "NSWorkspace refused to open it".into(),
        })
    }
}
