use std::io::Write;

use log::{debug, trace};
use thiserror::Error;

use crate::record::ConstantRecord;
use crate::table::RECORDS;
use crate::variant::Variant;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("failed to write constant table: {0}")]
    Write(#[from] std::io::Error),
}

/// Records rendered by `variant`, in table order.
pub fn records(variant: Variant) -> impl Iterator<Item = &'static ConstantRecord> {
    RECORDS.iter().filter(move |record| variant.includes(record.category()))
}

/// Writes one declaration line per record and returns the number of lines.
pub fn emit<W: Write>(out: &mut W, variant: Variant) -> Result<usize, EmitError> {
    let mut count = 0;
    for record in records(variant) {
        trace!("{} = {}", record.prefixed_name(), record.value());
        writeln!(out, "{}", record.declaration(variant))?;
        count += 1;
    }

    debug!("emitted {} constants ({:?})", count, variant);
    Ok(count)
}
