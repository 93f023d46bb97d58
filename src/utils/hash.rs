//! Content fingerprinting using blake3.

/// Compute the blake3 hash of content and return the first 8 hex characters.
///
/// The fingerprint depends only on the byte content, so identical content
/// always yields an identical fingerprint.
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(content: &T) -> String {
    let hash = blake3::hash(content.as_ref());
    hex::encode(&hash.as_bytes()[..4])
}
