//! Row - the fixed-width record stored inside a page.
//!
//! Every row serializes to exactly [`Row::SIZE`] bytes. The table layer
//! computes where a row's slot begins; this module owns what the bytes
//! inside the slot mean.

use std::fmt;

/// One logical record: numeric id plus two bounded text columns.
///
/// # Layout (293 bytes)
/// ```text
/// Offset  Size  Field
/// ------  ----  -----
/// 0       4     id (u32, little-endian)
/// 4       33    username (32-byte capacity + NUL terminator)
/// 37      256   email (255-byte capacity + NUL terminator)
/// ```
///
/// Text fields are stored C-string style: content bytes followed by a NUL,
/// with the rest of the slot zeroed. Decoding reads up to the first NUL.
/// Round-trip equality holds for any row whose fields fit their capacities
/// and contain no NUL byte.
///
/// # Size validation
/// [`Row::write_to`] truncates oversized fields rather than rejecting them.
/// Enforcing the capacities is the statement parser's job
/// ([`crate::repl::command`]); rows that reach the storage layer are
/// expected to already fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl Row {
    /// Serialized size of a row in bytes.
    pub const SIZE: usize = Self::ID_SIZE + Self::USERNAME_SIZE + Self::EMAIL_SIZE;

    /// Size of the id field.
    pub const ID_SIZE: usize = 4;

    /// Longest username the schema admits, in bytes.
    pub const USERNAME_CAPACITY: usize = 32;

    /// Longest email the schema admits, in bytes.
    pub const EMAIL_CAPACITY: usize = 255;

    /// On-disk width of the username field (capacity plus NUL terminator).
    pub const USERNAME_SIZE: usize = Self::USERNAME_CAPACITY + 1;

    /// On-disk width of the email field (capacity plus NUL terminator).
    pub const EMAIL_SIZE: usize = Self::EMAIL_CAPACITY + 1;

    /// Offset of each field within the serialized row.
    pub const OFFSET_ID: usize = 0;
    pub const OFFSET_USERNAME: usize = Self::OFFSET_ID + Self::ID_SIZE;
    pub const OFFSET_EMAIL: usize = Self::OFFSET_USERNAME + Self::USERNAME_SIZE;

    /// Create a new row.
    pub fn new(id: u32, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Serialize this row into the beginning of a byte slice.
    ///
    /// Fields longer than their capacity are truncated at the byte level;
    /// shorter fields leave the remainder of their slot zeroed, so writing
    /// over a previously occupied slot never leaves stale bytes behind.
    ///
    /// # Panics
    /// Panics if `out.len() < Row::SIZE`.
    pub fn write_to(&self, out: &mut [u8]) {
        assert!(out.len() >= Self::SIZE, "buffer too small for Row");

        out[Self::OFFSET_ID..Self::OFFSET_ID + Self::ID_SIZE]
            .copy_from_slice(&self.id.to_le_bytes());

        write_text_field(
            &mut out[Self::OFFSET_USERNAME..Self::OFFSET_USERNAME + Self::USERNAME_SIZE],
            &self.username,
            Self::USERNAME_CAPACITY,
        );
        write_text_field(
            &mut out[Self::OFFSET_EMAIL..Self::OFFSET_EMAIL + Self::EMAIL_SIZE],
            &self.email,
            Self::EMAIL_CAPACITY,
        );
    }

    /// Deserialize a row from the beginning of a byte slice.
    ///
    /// Inverse of [`Row::write_to`]. Text bytes that are not valid UTF-8
    /// are replaced lossily; rows written by this program are always valid.
    ///
    /// # Panics
    /// Panics if `slot.len() < Row::SIZE`.
    pub fn read_from(slot: &[u8]) -> Self {
        assert!(slot.len() >= Self::SIZE, "buffer too small for Row");

        let id = u32::from_le_bytes([
            slot[Self::OFFSET_ID],
            slot[Self::OFFSET_ID + 1],
            slot[Self::OFFSET_ID + 2],
            slot[Self::OFFSET_ID + 3],
        ]);

        let username = read_text_field(
            &slot[Self::OFFSET_USERNAME..Self::OFFSET_USERNAME + Self::USERNAME_SIZE],
        );
        let email =
            read_text_field(&slot[Self::OFFSET_EMAIL..Self::OFFSET_EMAIL + Self::EMAIL_SIZE]);

        Self {
            id,
            username,
            email,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}

/// Zero a field slot, then copy at most `capacity` content bytes into it.
///
/// The slot is one byte wider than `capacity`, so the terminating NUL is
/// always present even for content at full capacity.
fn write_text_field(slot: &mut [u8], value: &str, capacity: usize) {
    slot.fill(0);
    let len = value.len().min(capacity);
    slot[..len].copy_from_slice(&value.as_bytes()[..len]);
}

/// Read a field slot's content: the bytes before the first NUL.
fn read_text_field(slot: &[u8]) -> String {
    let end = slot.iter().position(|&b| b == 0).unwrap_or(slot.len());
    String::from_utf8_lossy(&slot[..end]).into_owned()
}

// ============================================================================
// TESTS
// ============================================================================
