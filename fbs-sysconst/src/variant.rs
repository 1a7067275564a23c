use crate::record::Category;

/// Base used when printing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    Hex,
}

/// Output flavour of the constant table.
///
/// `Plain` lists syscalls only, typed `::c_long`, in decimal.
/// `Extended` adds ioctl request codes, typed `c_long`, in hexadecimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Plain,
    Extended,
}

impl Variant {
    pub const fn type_name(self) -> &'static str {
        match self {
            Variant::Plain => "::c_long",
            Variant::Extended => "c_long",
        }
    }

    pub const fn radix(self) -> Radix {
        match self {
            Variant::Plain => Radix::Decimal,
            Variant::Extended => Radix::Hex,
        }
    }

    pub const fn includes(self, category: Category) -> bool {
        match (self, category) {
            (Variant::Plain, Category::Ioctl) => false,
            _ => true,
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        if cfg!(feature = "extended") {
            Variant::Extended
        } else {
            Variant::Plain
        }
    }
}
