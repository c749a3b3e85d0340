//! Pager - the page store backing a table.
//!
//! The [`Pager`] owns the backing file and a bounded arena of in-memory
//! page buffers. Pages are materialized from disk on first reference and
//! stay resident for the rest of the session; the table layer decides when
//! (and how much of) a page is written back.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::{debug, trace};

use crate::common::config::{PAGE_SIZE, TABLE_MAX_PAGES};
use crate::common::Result;
use crate::storage::page::Page;

/// A non-evicting page cache over a single backing file.
///
/// # File Layout
/// The database is stored as a single file with pages laid out sequentially:
/// ```text
/// ┌─────────┬─────────┬─────────┬─────────┬─────────┐
/// │ Page 0  │ Page 1  │ Page 2  │  ...    │ Page N  │
/// │ (4KB)   │ (4KB)   │ (4KB)   │         │ (4KB)   │
/// └─────────┴─────────┴─────────┴─────────┴─────────┘
/// Offset:  0      4096     8192    ...    N×4096
/// ```
///
/// There is no file header: byte 0 of the file is byte 0 of page 0.
///
/// # Residency
/// The arena has [`TABLE_MAX_PAGES`] slots, each either absent or holding
/// an exclusively owned page buffer. A page is read from disk at most once
/// per session; later references reuse the resident buffer. All buffers are
/// released when the pager is dropped.
///
/// # Contract violations
/// A page number `>= TABLE_MAX_PAGES`, or flushing a page that was never
/// loaded, is a bug in the caller and panics. Environmental failures
/// (open/seek/read/write) are returned as [`crate::common::Error::Io`].
pub struct Pager {
    file: File,

    /// Byte length of the backing file as observed at open.
    file_len: u64,

    /// Arena of page slots; a slot holds `Some` once its page is resident.
    pages: [Option<Box<Page>>; TABLE_MAX_PAGES],
}

impl Pager {
    /// Open the backing file, creating it if it does not exist.
    ///
    /// Records the file's current byte length; the table layer derives its
    /// row count from it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or its metadata read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .open(&path)?;

        let file_len = file.metadata()?.len();
        debug!("opened {} ({} bytes)", path.as_ref().display(), file_len);

        Ok(Self {
            file,
            file_len,
            pages: std::array::from_fn(|_| None),
        })
    }

    /// Byte length of the backing file as observed at open.
    #[inline]
    pub fn file_len(&self) -> u64 {
        self.file_len
    }

    /// Whether the page at `page_num` is currently resident.
    #[inline]
    pub fn is_resident(&self, page_num: usize) -> bool {
        self.pages[page_num].is_some()
    }

    /// Get the page at `page_num`, materializing it on first reference.
    ///
    /// An absent slot is filled with a zeroed buffer; if any prefix of the
    /// page was persisted before this session (the page starts inside the
    /// file length observed at open), that prefix is read in. The returned
    /// buffer stays resident until the pager is dropped.
    ///
    /// # Panics
    /// Panics if `page_num >= TABLE_MAX_PAGES`. Out-of-range page numbers
    /// indicate a corrupted row count or a caller bug, not a user error.
    ///
    /// # Errors
    /// Returns an error if reading the persisted prefix fails.
    pub fn get_page(&mut self, page_num: usize) -> Result<&mut Page> {
        assert!(
            page_num < TABLE_MAX_PAGES,
            "page number {page_num} out of bounds (max {})",
            TABLE_MAX_PAGES - 1
        );

        let slot = &mut self.pages[page_num];
        if slot.is_none() {
            let mut page = Box::new(Page::new());

            let offset = (page_num * PAGE_SIZE) as u64;
            let on_disk = self.file_len.saturating_sub(offset).min(PAGE_SIZE as u64) as usize;
            if on_disk > 0 {
                self.file.seek(SeekFrom::Start(offset))?;
                self.file.read_exact(&mut page.as_mut_slice()[..on_disk])?;
                debug!("page {page_num}: loaded {on_disk} bytes from disk");
            } else {
                trace!("page {page_num}: fresh");
            }

            *slot = Some(page);
        } else {
            trace!("page {page_num}: resident");
        }

        match slot {
            Some(page) => Ok(page),
            None => unreachable!("page slot {page_num} was just populated"),
        }
    }

    /// Write `byte_count` bytes of the resident page at `page_num` back to
    /// its file position.
    ///
    /// Full pages are flushed with `byte_count == PAGE_SIZE`; the trailing
    /// partial page is flushed with only its valid rows' bytes so the file
    /// ends at the last row (see the table layer's close logic).
    ///
    /// # Panics
    /// Panics if the slot is absent (flushing a page that was never loaded
    /// is a caller bug) or if `byte_count > PAGE_SIZE`.
    ///
    /// # Errors
    /// Returns an error if the seek or write fails.
    pub fn flush(&mut self, page_num: usize, byte_count: usize) -> Result<()> {
        assert!(
            page_num < TABLE_MAX_PAGES,
            "page number {page_num} out of bounds (max {})",
            TABLE_MAX_PAGES - 1
        );
        assert!(
            byte_count <= PAGE_SIZE,
            "flush of {byte_count} bytes exceeds the page size"
        );

        let page = match &self.pages[page_num] {
            Some(page) => page,
            None => panic!("tried to flush page {page_num}, which was never loaded"),
        };

        let offset = (page_num * PAGE_SIZE) as u64;
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(&page.as_slice()[..byte_count])?;
        debug!("page {page_num}: flushed {byte_count} bytes");

        Ok(())
    }

    /// Flush the file handle's buffered state to disk.
    ///
    /// Called once after the close-time page writes. `File`'s drop cannot
    /// report close failures, so this is the point where they surface.
    ///
    /// # Errors
    /// Returns an error if the sync fails.
    pub fn sync(&mut self) -> Result<()> {
        self.file.sync_all()?;
        Ok(())
    }
}
