//! Thin layer over objc2 used by all the AppKit code.
//!
//! The UI is written against raw `id` pointers and `msg_send!`, so this
//! module gathers the aliases, constants and ivar helpers that style needs
//! in one import.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::{c_char, CStr, CString};

pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{msg_send, sel};

pub use objc2_foundation::{NSPoint, NSRect, NSSize};

use objc2::encode::Encode;
use objc2::rc::Retained;
use objc2_foundation::NSString;

/// Untyped Objective-C object pointer.
pub type id = *mut AnyObject;

pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES` (a `BOOL`, not a Rust `bool`).
pub const YES: Bool = Bool::YES;

/// Objective-C `NO`.
pub const NO: Bool = Bool::NO;

/// The shared NSApplication.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![objc2::class!(NSApplication), sharedApplication] }
}

/// NSString as a raw pointer, autoreleased.
///
/// Safe to hand to any `msg_send!` in the current pool scope.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::autorelease_return(ns) as id
}

/// Copy an NSString into a Rust `String`. `None` for nil.
///
/// # Safety
/// `s` must be nil or an NSString.
pub unsafe fn string_from_nsstring(s: id) -> Option<String> {
    if s == nil {
        return None;
    }
    let ptr: *const c_char = msg_send![s, UTF8String];
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

/// Look up an Objective-C class by name.
///
/// Panics if the class is not registered: every name passed here is an
/// AppKit/Foundation class or one of ours registered at startup.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    CString::new(name)
        .ok()
        .and_then(|c_name| AnyClass::get(&c_name))
        .unwrap_or_else(|| panic!("class '{name}' not found"))
}

/// Typed access to instance variables of our `ClassBuilder` classes.
pub trait ObjectExt {
    /// # Safety
    /// The ivar must exist and be of type `T`. Main thread only.
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// # Safety
    /// The ivar must exist and be of type `T`. Main thread only.
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let ivar = CString::new(name)
            .ok()
            .and_then(|c_name| self.class().instance_variable(&c_name))
            .unwrap_or_else(|| panic!("ivar '{name}' not found"));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let ivar = CString::new(name)
            .ok()
            .and_then(|c_name| self.class().instance_variable(&c_name))
            .unwrap_or_else(|| panic!("ivar '{name}' not found"));
        *ivar.load_mut::<T>(self) = value;
    }
}

/// Run `f` inside an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    objc2::rc::autoreleasepool(|_| f())
}
