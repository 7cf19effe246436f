//! Object ID derivation for catalog records.

use md5::{Digest, Md5};

/// Length of every derived object ID, in hex characters.
pub const OBJECT_ID_LEN: usize = 12;

/// Derive the search-index object ID for a record.
///
/// The ID is the MD5 digest of `{prefix}-{name}-{index}`, hex-encoded and
/// truncated to [`OBJECT_ID_LEN`] characters. Only these three inputs feed the
/// hash, so the ID is stable across runs for a stable name and index.
///
/// # Example
///
/// ```
/// use catalog_indexer_shared::derive_object_id;
///
/// let id = derive_object_id("exercise", "Morning Jog", 0);
/// assert_eq!(id.len(), 12);
/// assert_eq!(id, derive_object_id("exercise", "Morning Jog", 0));
/// ```
pub fn derive_object_id(prefix: &str, name: &str, index: usize) -> String {
    let digest = Md5::digest(format!("{}-{}-{}", prefix, name, index).as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(OBJECT_ID_LEN);
    id
}
