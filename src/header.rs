//! Textual archive header: spec.md §6's `"<name>:<level>:<size>\r\n\x1A"`,
//! parsed per Design Note REDESIGN FLAG #2 by buffering up to the `0x1A`
//! terminator and splitting on `:` rather than scanning the input in place.

use crate::error::CodecError;

pub const MAGIC_NAME: &str = "cmpaq";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub level: u32,
    pub plaintext_size: u64,
}

impl Header {
    pub fn encode(&self) -> Vec<u8> {
        let mut out = format!("{MAGIC_NAME}:{}:{}\r\n", self.level, self.plaintext_size).into_bytes();
        out.push(0x1A);
        out
    }

    /// Parse a header from the start of `input`, returning the header and
    /// the number of bytes it occupied.
    pub fn decode(input: &[u8]) -> Result<(Header, usize), CodecError> {
        let terminator = input
            .iter()
            .position(|&b| b == 0x1A)
            .ok_or_else(|| CodecError::InvalidHeader("missing 0x1A terminator".to_string()))?;

        let text = std::str::from_utf8(&input[..terminator])
            .map_err(|_| CodecError::InvalidHeader("header is not valid UTF-8".to_string()))?;
        let text = text.trim_end_matches("\r\n");

        let mut fields = text.split(':');
        let name = fields
            .next()
            .ok_or_else(|| CodecError::InvalidHeader("missing archive name".to_string()))?;
        if name != MAGIC_NAME {
            return Err(CodecError::FormatMismatch {
                expected: MAGIC_NAME.to_string(),
                found: name.to_string(),
            });
        }

        let level: u32 = fields
            .next()
            .ok_or_else(|| CodecError::InvalidHeader("missing level field".to_string()))?
            .parse()
            .map_err(|_| CodecError::InvalidHeader("level field is not a number".to_string()))?;

        let plaintext_size: u64 = fields
            .next()
            .ok_or_else(|| CodecError::InvalidHeader("missing size field".to_string()))?
            .parse()
            .map_err(|_| CodecError::InvalidHeader("size field is not a number".to_string()))?;

        if fields.next().is_some() {
            return Err(CodecError::InvalidHeader("too many fields".to_string()));
        }

        Ok((
            Header {
                level: crate::level::clamp(level),
                plaintext_size,
            },
            terminator + 1,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_encode_decode() {
        let h = Header {
            level: 5,
            plaintext_size: 123_456,
        };
        let bytes = h.encode();
        let (decoded, len) = Header::decode(&bytes).unwrap();
        assert_eq!(decoded, h);
        assert_eq!(len, bytes.len());
    }

    #[test]
    fn decode_stops_at_terminator_and_ignores_trailing_payload() {
        let mut bytes = Header {
            level: 0,
            plaintext_size: 0,
        }
        .encode();
        bytes.extend_from_slice(b"coded payload goes here");
        let (decoded, len) = Header::decode(&bytes).unwrap();
        assert_eq!(decoded.plaintext_size, 0);
        assert!(len < bytes.len());
    }

    #[test]
    fn out_of_range_level_is_clamped_on_decode() {
        let bytes = format!("{MAGIC_NAME}:42:0\r\n\x1A").into_bytes();
        let (decoded, _) = Header::decode(&bytes).unwrap();
        assert_eq!(decoded.level, crate::level::DEFAULT_LEVEL);
    }

    #[test]
    fn wrong_magic_name_is_rejected() {
        let bytes = b"notcmpaq:5:0\r\n\x1A".to_vec();
        match Header::decode(&bytes) {
            Err(CodecError::FormatMismatch { expected, found }) => {
                assert_eq!(expected, MAGIC_NAME);
                assert_eq!(found, "notcmpaq");
            }
            other => panic!("expected FormatMismatch, got {other:?}"),
        }
    }

    #[test]
    fn missing_terminator_is_an_invalid_header() {
        let bytes = b"cmpaq:5:0\r\n".to_vec();
        assert!(matches!(Header::decode(&bytes), Err(CodecError::InvalidHeader(_))));
    }

    #[test]
    fn malformed_numeric_field_is_an_invalid_header() {
        let bytes = b"cmpaq:five:0\r\n\x1A".to_vec();
        assert!(matches!(Header::decode(&bytes), Err(CodecError::InvalidHeader(_))));
    }
}
