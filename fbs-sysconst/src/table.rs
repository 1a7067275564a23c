//! The fixed list of kernel numbers exported by this crate.
//!
//! Each entry becomes a public `c_long` constant named `<TAG>_<name>` and a
//! [`ConstantRecord`] in [`RECORDS`], in the order listed here.

use libc::c_long;
use linux_uapi_sys::*;
use paste::paste;

use crate::record::{Category, ConstantRecord};

macro_rules! constant_table {
    (@category SYS) => { Category::Syscall };
    (@category IOC) => { Category::Ioctl };

    ($( $(#[$meta:meta])* $category:ident $name:ident = $value:expr; )*) => {
        paste! {
            $(
                $(#[$meta])*
                #[allow(non_upper_case_globals)]
                pub const [<$category _ $name>]: c_long = $value as c_long;
            )*

            /// Every constant, in output order.
            pub static RECORDS: &[ConstantRecord] = &[
                $(
                    $(#[$meta])*
                    ConstantRecord::new(
                        constant_table!(@category $category),
                        stringify!($name),
                        [<$category _ $name>],
                    ),
                )*
            ];
        }
    };
}

constant_table! {
    SYS epoll_create = __NR_epoll_create;
    SYS io_uring_register = __NR_io_uring_register;
    SYS io_uring_enter = __NR_io_uring_enter;
    SYS io_uring_setup = __NR_io_uring_setup;
    #[cfg(feature = "extended")]
    IOC BLKGETSIZE64 = BLKGETSIZE64;
}
