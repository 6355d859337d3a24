//! Top-level `compress`/`decompress` entry points: spec.md §5's driver,
//! gluing the textual [`crate::header::Header`] to the [`crate::coder`]
//! arithmetic codec.

use log::debug;

use crate::coder::{Decoder, Encoder};
use crate::error::CodecError;
use crate::header::Header;
use crate::level::clamp;

/// Compress `data` at `level` (clamped to `0..=9`) into a self-describing
/// archive: header followed by the coded bitstream.
pub fn compress(data: &[u8], level: u32) -> Vec<u8> {
    let level = clamp(level);
    debug!("compressing {} bytes at level {level}", data.len());

    let header = Header {
        level,
        plaintext_size: data.len() as u64,
    };
    let mut out = header.encode();
    out.extend(Encoder::new(level).encode(data));

    debug!("archive is {} bytes", out.len());
    out
}

/// Decompress an archive produced by [`compress`], recovering the
/// original bytes. The level used is always the one recorded in the
/// header, never caller-supplied (spec.md §9).
pub fn decompress(archive: &[u8]) -> Result<Vec<u8>, CodecError> {
    let (header, payload_start) = Header::decode(archive)?;
    debug!(
        "decompressing {} bytes at level {} into {} bytes",
        archive.len() - payload_start,
        header.level,
        header.plaintext_size
    );

    let payload = &archive[payload_start..];
    let decoded = Decoder::new(header.level, payload).decode(header.plaintext_size as usize);
    Ok(decoded)
}
