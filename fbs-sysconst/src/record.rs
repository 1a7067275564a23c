use std::fmt::{Display, Formatter};

use libc::c_long;

use crate::variant::{Radix, Variant};

/// Kind of kernel number, selects the name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Syscall,
    Ioctl,
}

impl Category {
    pub const fn tag(self) -> &'static str {
        match self {
            Category::Syscall => "SYS",
            Category::Ioctl => "IOC",
        }
    }
}

/// A named kernel number resolved from the target's headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantRecord {
    category: Category,
    name: &'static str,
    value: c_long,
}

impl ConstantRecord {
    pub const fn new(category: Category, name: &'static str, value: c_long) -> Self {
        Self { category, name, value }
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Symbol name as spelled in the kernel headers, without the tag.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn value(&self) -> c_long {
        self.value
    }

    pub fn prefixed_name(&self) -> String {
        format!("{}_{}", self.category.tag(), self.name)
    }

    pub fn declaration(&self, variant: Variant) -> Declaration<'_> {
        Declaration { record: self, variant }
    }
}

/// One `pub const` line of the table, without the trailing newline.
pub struct Declaration<'a> {
    record: &'a ConstantRecord,
    variant: Variant,
}

impl Display for Declaration<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let record = self.record;
        write!(
            f,
            "pub const {}_{}: {} = ",
            record.category.tag(),
            record.name,
            self.variant.type_name()
        )?;

        // Hex of a negative value is its two's complement, like `%lx`.
        match self.variant.radix() {
            Radix::Decimal => write!(f, "{}", record.value)?,
            Radix::Hex => write!(f, "{:#x}", record.value)?,
        }

        f.write_str(";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_name_keeps_kernel_spelling() {
        let syscall = ConstantRecord::new(Category::Syscall, "io_uring_enter", 426);
        let ioctl = ConstantRecord::new(Category::Ioctl, "BLKGETSIZE64", 0x80081272);

        assert_eq!(syscall.prefixed_name(), "SYS_io_uring_enter");
        assert_eq!(ioctl.prefixed_name(), "IOC_BLKGETSIZE64");
    }

    #[test]
    fn plain_declaration() {
        let record = ConstantRecord::new(Category::Syscall, "epoll_create", 213);

        assert_eq!(
            record.declaration(Variant::Plain).to_string(),
            "pub const SYS_epoll_create: ::c_long = 213;"
        );
    }

    #[test]
    fn extended_declaration() {
        let syscall = ConstantRecord::new(Category::Syscall, "epoll_create", 213);
        let ioctl = ConstantRecord::new(Category::Ioctl, "BLKGETSIZE64", 0x80081272);

        assert_eq!(
            syscall.declaration(Variant::Extended).to_string(),
            "pub const SYS_epoll_create: c_long = 0xd5;"
        );
        assert_eq!(
            ioctl.declaration(Variant::Extended).to_string(),
            "pub const IOC_BLKGETSIZE64: c_long = 0x80081272;"
        );
    }

    #[test]
    fn negative_values() {
        let record = ConstantRecord::new(Category::Syscall, "bogus", -1);

        assert_eq!(
            record.declaration(Variant::Plain).to_string(),
            "pub const SYS_bogus: ::c_long = -1;"
        );
        assert_eq!(
            record.declaration(Variant::Extended).to_string(),
            format!("pub const SYS_bogus: c_long = 0x{};", "f".repeat(2 * std::mem::size_of::<c_long>()))
        );
    }
}
