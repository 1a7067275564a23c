//! Numeric macros from the Linux UAPI headers, as seen by the target's C
//! toolchain when this crate is built.
//!
//! Only the macros this workspace needs are extracted. A macro the headers do
//! not define produces no item here, so referencing it is a compile error:
//!
//! ```compile_fail
//! let _ = linux_uapi_sys::__NR_not_a_syscall;
//! ```
#![allow(nonstandard_style)]

include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
