#[path = "shared/lib.rs"]
mod shared;
use shared::constants::{COMPANY_SYMBOL_CSV_FILE_PATH, COMPRESSED_COMPANY_SYMBOL_FILE_NAME};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure that Cargo re-runs the build script if the input file changes
    println!(
        "cargo:rerun-if-changed={}",
        COMPANY_SYMBOL_CSV_FILE_PATH.display()
    );

    let output_path = PathBuf::from(env::var("OUT_DIR")?).join(COMPRESSED_COMPANY_SYMBOL_FILE_NAME);

    let mut input_file = File::open(&*COMPANY_SYMBOL_CSV_FILE_PATH)?;
    let output_file = File::create(&output_path)?;

    let mut encoder = GzEncoder::new(output_file, Compression::best());
    io::copy(&mut input_file, &mut encoder)?;
    encoder.finish()?;

    Ok(())
}
