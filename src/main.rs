//! `cmpaq` CLI: spec.md §6's invocation surface.
//!
//! ```text
//! cmpaq <file>                  compress -> <basename(file)>.zpaq
//! cmpaq -d <input> <output>     decompress, refuses existing <output>
//! cmpaq -level N <file>         optional: override compression level 0..9
//! ```
//!
//! All user-facing output lives here; `cmpaq`-the-library never prints.

use std::path::{Path, PathBuf};
use std::process::exit;

use log::debug;
use pico_args::Arguments;

use cmpaq::{compress, decompress, CodecError, DEFAULT_LEVEL};

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .init()
        .expect("logger already initialized");

    if let Err(msg) = run() {
        println!("{msg}");
        exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = Arguments::from_env();

    let level: u32 = args
        .opt_value_from_str("-level")
        .map_err(|e| format!("invalid -level: {e}"))?
        .unwrap_or(DEFAULT_LEVEL);

    let decompress_mode = args.contains("-d");

    if decompress_mode {
        let input: PathBuf = args
            .free_from_str()
            .map_err(|_| "missing input archive".to_string())?;
        let output: PathBuf = args
            .free_from_str()
            .map_err(|_| "missing output path".to_string())?;
        decompress_file(&input, &output)
    } else {
        let input: PathBuf = args
            .free_from_str()
            .map_err(|_| "missing input file".to_string())?;
        compress_file(&input, level)
    }
}

fn compress_file(input: &Path, level: u32) -> Result<(), String> {
    let data = std::fs::read(input).map_err(|e| CodecError::Io(e).to_string())?;
    debug!("read {} bytes from {}", data.len(), input.display());

    let archive = compress(&data, level);

    let output = output_path_for(input);
    if output.exists() {
        return Err(CodecError::OutputExists(output).to_string());
    }
    std::fs::write(&output, &archive).map_err(|e| CodecError::Io(e).to_string())?;
    debug!("wrote {} bytes to {}", archive.len(), output.display());
    Ok(())
}

fn decompress_file(input: &Path, output: &Path) -> Result<(), String> {
    if output.exists() {
        return Err(CodecError::OutputExists(output.to_path_buf()).to_string());
    }
    let archive = std::fs::read(input).map_err(|e| CodecError::Io(e).to_string())?;
    let data = decompress(&archive).map_err(|e| e.to_string())?;
    std::fs::write(output, &data).map_err(|e| CodecError::Io(e).to_string())?;
    debug!("wrote {} bytes to {}", data.len(), output.display());
    Ok(())
}

/// `<basename(file)>.zpaq` in the current working directory (spec.md §6),
/// regardless of which directory `input` itself lives in. The full
/// basename is kept (not just the stem), matching `original_source/main.c`'s
/// `sprintf(target_name, "%s.zpaq", basename(...))`.
fn output_path_for(input: &Path) -> PathBuf {
    let mut name = input.file_name().unwrap_or_default().to_os_string();
    name.push(".zpaq");
    PathBuf::from(name)
}
