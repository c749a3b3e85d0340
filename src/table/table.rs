//! Table - the single-table row store.
//!
//! Rows are appended in insertion order and packed into pages without
//! spanning a page boundary:
//!
//! ```text
//! row_num:       0     1    ...    12  |   13    14   ...    25  | ...
//! page_num:      0     0    ...     0  |    1     1   ...     1  | ...
//! byte_offset:   0   293    ...  3516  |    0   293   ...  3516  | ...
//! ```
//!
//! With 293-byte rows and 4096-byte pages, each page holds 13 rows and the
//! final 287 bytes of a full page are unused padding. The padding is never
//! written to disk: close flushes full pages whole and the trailing partial
//! page only up to its last row, so the file length alone determines the
//! row count on the next open.

use std::path::Path;

use log::{debug, trace};

use crate::common::config::{MAX_FILE_SIZE, PAGE_SIZE, TABLE_MAX_PAGES};
use crate::common::{Error, Result};
use crate::storage::page::Row;
use crate::storage::Pager;

/// Number of rows that fit in one page (13).
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / Row::SIZE;

/// Maximum number of rows a table can hold (1300).
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;

/// The in-page location of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSlot {
    /// Page holding the row.
    pub page_num: usize,
    /// Byte offset of the row within its page.
    pub byte_offset: usize,
}

impl RowSlot {
    /// Locate the slot for `row_num`.
    #[inline]
    pub fn of(row_num: usize) -> Self {
        Self {
            page_num: row_num / ROWS_PER_PAGE,
            byte_offset: (row_num % ROWS_PER_PAGE) * Row::SIZE,
        }
    }
}

/// An append-only table of fixed-width rows backed by a [`Pager`].
///
/// The row count is derived from the file length at open and tracked in
/// memory afterwards; nothing else about the table is persisted. All
/// mutations live only in resident pages until [`Table::close`] writes
/// them back, so a process that exits without closing loses its session's
/// inserts.
pub struct Table {
    pager: Pager,
    num_rows: usize,
}

impl Table {
    /// Open the table stored at `path`, creating an empty one if the file
    /// does not exist.
    ///
    /// The row count is recovered from the file length: every whole page
    /// contributes [`ROWS_PER_PAGE`] rows and the trailing partial page one
    /// row per [`Row::SIZE`] bytes.
    ///
    /// # Errors
    /// Returns [`Error::FileTooLarge`] if the file exceeds the maximum table
    /// size, [`Error::CorruptFile`] if the trailing partial page is not a
    /// whole number of rows, or [`Error::Io`] if the open fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let pager = Pager::open(path)?;

        let file_len = pager.file_len();
        if file_len > MAX_FILE_SIZE {
            return Err(Error::FileTooLarge(file_len));
        }

        let full_pages = file_len as usize / PAGE_SIZE;
        let trailing = file_len as usize % PAGE_SIZE;
        if trailing % Row::SIZE != 0 {
            return Err(Error::CorruptFile(file_len));
        }

        let num_rows = full_pages * ROWS_PER_PAGE + trailing / Row::SIZE;
        debug!("table opened with {num_rows} rows");

        Ok(Self { pager, num_rows })
    }

    /// Number of rows currently in the table.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Append `row` after the last existing row.
    ///
    /// # Errors
    /// Returns [`Error::TableFull`] if the table already holds
    /// [`TABLE_MAX_ROWS`] rows, or [`Error::Io`] if materializing the
    /// target page fails.
    pub fn insert(&mut self, row: &Row) -> Result<()> {
        if self.num_rows >= TABLE_MAX_ROWS {
            return Err(Error::TableFull);
        }

        let slot = RowSlot::of(self.num_rows);
        let page = self.pager.get_page(slot.page_num)?;
        row.write_to(&mut page.as_mut_slice()[slot.byte_offset..slot.byte_offset + Row::SIZE]);

        trace!(
            "row {} written to page {} at offset {}",
            self.num_rows,
            slot.page_num,
            slot.byte_offset
        );
        self.num_rows += 1;
        Ok(())
    }

    /// Iterate over all rows in insertion order.
    ///
    /// Pages are materialized lazily as the scan reaches them, so each item
    /// is a `Result`: a row, or the I/O error that interrupted the scan.
    ///
    /// # Errors
    /// Returns [`Error::TableEmpty`] if the table has no rows.
    pub fn scan(&mut self) -> Result<TableScan<'_>> {
        if self.num_rows == 0 {
            return Err(Error::TableEmpty);
        }
        Ok(TableScan {
            table: self,
            next_row: 0,
        })
    }

    /// Write all resident pages back to disk and sync the file.
    ///
    /// Full pages are written whole; the trailing partial page is written
    /// only up to its last row. Pages never referenced this session are
    /// skipped, their on-disk bytes are already current. Consumes the
    /// table: this is the only point where inserts become durable.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if a page write or the final sync fails.
    pub fn close(mut self) -> Result<()> {
        let full_pages = self.num_rows / ROWS_PER_PAGE;
        for page_num in 0..full_pages {
            if self.pager.is_resident(page_num) {
                self.pager.flush(page_num, PAGE_SIZE)?;
            }
        }

        let leftover_rows = self.num_rows % ROWS_PER_PAGE;
        if leftover_rows > 0 && self.pager.is_resident(full_pages) {
            self.pager.flush(full_pages, leftover_rows * Row::SIZE)?;
        }

        self.pager.sync()?;
        debug!("table closed with {} rows", self.num_rows);
        Ok(())
    }
}

/// Forward scan over a table's rows.
///
/// Borrows the table mutably for its lifetime because reaching a
/// non-resident page materializes it.
pub struct TableScan<'a> {
    table: &'a mut Table,
    next_row: usize,
}

impl Iterator for TableScan<'_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_row >= self.table.num_rows {
            return None;
        }

        let slot = RowSlot::of(self.next_row);
        self.next_row += 1;

        match self.table.pager.get_page(slot.page_num) {
            Ok(page) => {
                let bytes = &page.as_slice()[slot.byte_offset..slot.byte_offset + Row::SIZE];
                Some(Ok(Row::read_from(bytes)))
            }
            Err(err) => Some(Err(err)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.num_rows - self.next_row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TableScan<'_> {}
