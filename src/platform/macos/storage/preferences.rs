//! NSUserDefaults as a [`PreferencesBackend`].

use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id};
use crate::platform::macos::ffi::{nsarray_from_strings, strings_from_nsarray};
use crate::store::PreferencesBackend;

/// Reads a double from NSUserDefaults, `None` if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_double(key: &str) -> Option<f64> {
    let ud = standard_defaults();
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, objectForKey: k];
    if obj == nil {
        return None;
    }
    let is_number: bool = msg_send![obj, isKindOfClass: get_class("NSNumber")];
    if !is_number {
        return None;
    }
    Some(msg_send![ud, doubleForKey: k])
}

/// Saves a double to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_double(key: &str, val: f64) {
    let ud = standard_defaults();
    let _: () = msg_send![ud, setDouble: val, forKey: nsstring_id(key)];
}

/// Reads a bool from NSUserDefaults, `None` if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_bool(key: &str) -> Option<bool> {
    let ud = standard_defaults();
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, objectForKey: k];
    if obj == nil {
        return None;
    }
    let is_number: bool = msg_send![obj, isKindOfClass: get_class("NSNumber")];
    if !is_number {
        return None;
    }
    Some(msg_send![ud, boolForKey: k])
}

/// Saves a bool to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_bool(key: &str, val: bool) {
    let ud = standard_defaults();
    let _: () = msg_send![ud, setBool: val, forKey: nsstring_id(key)];
}

/// Reads a string array from NSUserDefaults, `None` if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_string_array(key: &str) -> Option<Vec<String>> {
    let ud = standard_defaults();
    let obj: id = msg_send![ud, objectForKey: nsstring_id(key)];
    if obj == nil {
        return None;
    }
    let is_array: bool = msg_send![obj, isKindOfClass: get_class("NSArray")];
    if !is_array {
        return None;
    }
    Some(strings_from_nsarray(obj))
}

/// Saves a string array to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_string_array(key: &str, values: &[String]) {
    let ud = standard_defaults();
    let array = nsarray_from_strings(values);
    let _: () = msg_send![ud, setObject: array, forKey: nsstring_id(key)];
}

unsafe fn standard_defaults() -> id {
    msg_send![get_class("NSUserDefaults"), standardUserDefaults]
}

/// `standardUserDefaults`. Only usable on the main thread.
#[derive(Debug, Default)]
pub struct UserDefaults {
    _main_thread_only: std::marker::PhantomData<*const ()>,
}

impl UserDefaults {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferencesBackend for UserDefaults {
    fn get_bool(&self, key: &str) -> Option<bool> {
        unsafe { prefs_get_bool(key) }
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        unsafe { prefs_set_bool(key, value) }
    }

    fn get_f64(&self, key: &str) -> Option<f64> {
        unsafe { prefs_get_double(key) }
    }

    fn set_f64(&mut self, key: &str, value: f64) {
        unsafe { prefs_set_double(key, value) }
    }

    fn get_string_list(&self, key: &str) -> Option<Vec<String>> {
        unsafe { prefs_get_string_array(key) }
    }

    fn set_string_list(&mut self, key: &str, value: &[String]) {
        unsafe { prefs_set_string_array(key, value) }
    }
}
