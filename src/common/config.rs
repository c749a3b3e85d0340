//! Configuration constants for pagedb.

/// Size of a page in bytes (4KB).
///
/// This value is chosen to match:
/// - OS page size on most systems (4096 bytes)
/// - Common database page sizes (SQLite's default is 4KB)
///
/// A page is the unit of file I/O: page `n` lives at file offset
/// `n * PAGE_SIZE`.
pub const PAGE_SIZE: usize = 4096;

/// Maximum number of pages a table may occupy.
///
/// The pager holds an arena of exactly this many slots, and every page
/// loaded during a session stays resident until shutdown; there is no
/// eviction. Bounding the page count therefore bounds both memory use
/// (100 x 4KB) and table capacity (`table::TABLE_MAX_ROWS`).
pub const TABLE_MAX_PAGES: usize = 100;

/// Maximum backing file size in bytes.
pub const MAX_FILE_SIZE: u64 = (TABLE_MAX_PAGES * PAGE_SIZE) as u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_is_power_of_two() {
        assert!(PAGE_SIZE.is_power_of_two());
        assert_eq!(PAGE_SIZE, 4096);
    }

    #[test]
    fn test_max_file_size() {
        // 100 pages of 4KB
        assert_eq!(MAX_FILE_SIZE, 409_600);
    }
}
