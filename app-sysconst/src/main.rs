use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use fbs_sysconst::*;
use log::{debug, error};

// Standard output carries the table only; diagnostics go to stderr.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}

fn run() -> Result<usize, EmitError> {
    let variant = Variant::default();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let count = emit(&mut out, variant)?;
    out.flush()?;

    debug!("wrote {} declarations for {:?}", count, variant);
    Ok(count)
}

fn main() -> ExitCode {
    init_logger();

    match run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
