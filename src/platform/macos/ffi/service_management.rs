//! Link against ServiceManagement so `SMAppService` is registered with the
//! Objective-C runtime. The class itself is reached through `msg_send!`.

#[link(name = "ServiceManagement", kind = "framework")]
extern "C" {}
