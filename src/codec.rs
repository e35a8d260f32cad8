//! Fixed-width posting list encoding.
//!
//! A posting list is stored as a plain concatenation of little-endian `u32`
//! document ids: no header, no length prefix, `4 * n` bytes for `n` ids.
//! Because the layout has no framing, appending the bytes of one encoded list
//! to another yields the encoding of the concatenated lists, which is what the
//! SQL merge statements rely on.

use byteorder::{ByteOrder, LittleEndian};

use crate::DocId;

/// Number of bytes used per document id.
pub const POSTING_WIDTH: usize = 4;

/// Encode an ordered sequence of document ids.
///
/// Order is preserved and duplicates are kept.
pub fn encode_postings(postings: &[DocId]) -> Vec<u8> {
    let mut bytes = vec![0u8; POSTING_WIDTH * postings.len()];
    LittleEndian::write_u32_into(postings, &mut bytes);
    bytes
}

/// Decode a blob produced by [`encode_postings`] (or by appending several such
/// blobs).
///
/// Blobs are only ever written through [`encode_postings`], so the length is
/// always a multiple of [`POSTING_WIDTH`]; a trailing partial id is ignored.
pub fn decode_postings(bytes: &[u8]) -> Vec<DocId> {
    debug_assert!(
        bytes.len() % POSTING_WIDTH == 0,
        "posting blob of {} bytes is not a multiple of {POSTING_WIDTH}",
        bytes.len()
    );
    bytes
        .chunks_exact(POSTING_WIDTH)
        .map(LittleEndian::read_u32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let bytes = encode_postings(&[1, 0x0102_0304]);
        assert_eq!(bytes, vec![1, 0, 0, 0, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_empty_list() {
        assert!(encode_postings(&[]).is_empty());
        assert!(decode_postings(&[]).is_empty());
    }

    #[test]
    fn test_round_trip_keeps_order_and_duplicates() {
        let ids = vec![7, 3, 3, 0, 2_147_483_647, 42];
        let bytes = encode_postings(&ids);
        assert_eq!(bytes.len(), ids.len() * POSTING_WIDTH);
        assert_eq!(decode_postings(&bytes), ids);
    }

    #[test]
    fn test_concatenated_blobs_decode_as_appended_list() {
        let mut blob = encode_postings(&[5, 1]);
        blob.extend_from_slice(&encode_postings(&[9]));
        assert_eq!(decode_postings(&blob), vec![5, 1, 9]);
    }
}
