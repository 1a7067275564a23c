//! Constant table of kernel numbers (syscalls and ioctl request codes) for
//! code that cannot include C headers.
//!
//! Every value is resolved from the target's headers when this crate is
//! built. The table can be used directly as Rust constants, or rendered as
//! source text with [`emit`].

pub mod emitter;
pub mod record;
pub mod table;
pub mod variant;

pub use emitter::{emit, records, EmitError};
pub use record::{Category, ConstantRecord, Declaration};
pub use table::*;
pub use variant::{Radix, Variant};
