//! Wire-format helpers for sealed values and export blobs.
//!
//! Every AES-CBC output travels as `hex(iv) || hex(ciphertext)`: the IV is
//! always 16 bytes, so the first 32 hex characters split off unambiguously.
//! Export blobs are four such fields joined by `.`, then hex-encoded as a
//! whole.

use crate::core::version::V1;

/// An AES-CBC ciphertext together with the IV it was produced under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedBox {
    iv: [u8; V1::IV_SIZE],
    ciphertext: Vec<u8>,
}

impl SealedBox {
    /// Creates a sealed box from its parts.
    #[must_use]
    pub const fn new(iv: [u8; V1::IV_SIZE], ciphertext: Vec<u8>) -> Self {
        Self { iv, ciphertext }
    }

    /// Returns the initialization vector.
    #[must_use]
    pub const fn iv(&self) -> &[u8; V1::IV_SIZE] {
        &self.iv
    }

    /// Returns the raw ciphertext bytes.
    #[must_use]
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Encodes as `hex(iv) || hex(ciphertext)`.
    #[must_use]
    pub fn to_wire(&self) -> String {
        let mut wire = String::with_capacity(V1::IV_HEX_LEN + self.ciphertext.len() * 2);
        wire.push_str(&hex::encode(self.iv));
        wire.push_str(&hex::encode(&self.ciphertext));
        wire
    }

    /// Parses the `hex(iv) || hex(ciphertext)` form.
    ///
    /// Returns `None` when the input is too short to hold an IV and at least
    /// one ciphertext byte, or when either part is not valid hex. Upper- and
    /// lowercase hex are both accepted.
    #[must_use]
    pub fn parse(wire: &str) -> Option<Self> {
        let iv_hex = wire.get(..V1::IV_HEX_LEN)?;
        let body_hex = wire.get(V1::IV_HEX_LEN..)?;

        if body_hex.is_empty() {
            return None;
        }

        let mut iv = [0u8; V1::IV_SIZE];
        hex::decode_to_slice(iv_hex, &mut iv).ok()?;
        let ciphertext = hex::decode(body_hex).ok()?;

        Some(Self::new(iv, ciphertext))
    }
}

/// Joins the four export fields with the protocol separator.
///
/// The caller hex-encodes the result as a whole.
#[must_use]
pub fn join_export_fields(fields: [&str; 4]) -> String {
    let separator = V1::EXPORT_SEPARATOR.to_string();
    fields.join(separator.as_str())
}

/// Splits a decoded export blob into exactly four fields.
///
/// Returns `None` for any other field count. Empty fields are passed through
/// and rejected by the field decoders.
#[must_use]
pub fn split_export_fields(blob: &str) -> Option<[&str; 4]> {
    let mut parts = blob.split(V1::EXPORT_SEPARATOR);
    let fields = [parts.next()?, parts.next()?, parts.next()?, parts.next()?];

    if parts.next().is_some() {
        return None;
    }

    Some(fields)
}

/// Decodes a hex field that must hold exactly one symmetric key.
#[must_use]
pub fn decode_key_field(field: &str) -> Option<[u8; V1::SYMMETRIC_KEY_SIZE]> {
    let mut key = [0u8; V1::SYMMETRIC_KEY_SIZE];
    hex::decode_to_slice(field, &mut key).ok()?;
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_IV: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const TEST_WIRE: &str = "000102030405060708090a0b0c0d0e0fdeadbeef";

    #[test]
    fn test_to_wire() {
        let sealed = SealedBox::new(TEST_IV, vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(sealed.to_wire(), TEST_WIRE);
    }

    #[test]
    fn test_parse_valid() {
        let sealed = SealedBox::parse(TEST_WIRE).expect("valid wire");
        assert_eq!(sealed.iv(), &TEST_IV);
        assert_eq!(sealed.ciphertext(), &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_parse_uppercase_hex() {
        let sealed = SealedBox::parse(&TEST_WIRE.to_uppercase()).expect("valid wire");
        assert_eq!(sealed.to_wire(), TEST_WIRE);
    }

    #[test]
    fn test_parse_too_short() {
        assert!(SealedBox::parse("").is_none());
        assert!(SealedBox::parse("000102030405").is_none());
        // IV only, no ciphertext
        assert!(SealedBox::parse(&TEST_WIRE[..32]).is_none());
    }

    #[test]
    fn test_parse_non_hex() {
        assert!(SealedBox::parse("zz0102030405060708090a0b0c0d0e0fdeadbeef").is_none());
        assert!(SealedBox::parse("000102030405060708090a0b0c0d0e0fdeadbeeX").is_none());
        // Odd-length body
        assert!(SealedBox::parse("000102030405060708090a0b0c0d0e0fdea").is_none());
    }

    #[test]
    fn test_parse_multibyte_boundary() {
        // A multi-byte char straddling the IV boundary must not panic.
        let wire = format!("{}é{}", &TEST_WIRE[..31], &TEST_WIRE[32..]);
        assert!(SealedBox::parse(&wire).is_none());
    }

    #[test]
    fn test_split_export_fields() {
        let fields = split_export_fields("a.b.c.d").expect("four fields");
        assert_eq!(fields, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_split_export_wrong_count() {
        assert!(split_export_fields("").is_none());
        assert!(split_export_fields("a.b.c").is_none());
        assert!(split_export_fields("a.b.c.d.e").is_none());
    }

    #[test]
    fn test_join_export_fields() {
        assert_eq!(join_export_fields(["a", "b", "c", "d"]), "a.b.c.d");
    }

    #[test]
    fn test_decode_key_field() {
        let field = "42".repeat(32);
        assert_eq!(decode_key_field(&field), Some([0x42u8; 32]));

        // 16 bytes is not a symmetric key
        assert!(decode_key_field(&"42".repeat(16)).is_none());
        assert!(decode_key_field("not hex").is_none());
    }
}
