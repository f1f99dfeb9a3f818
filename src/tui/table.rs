//! Pagination shared by the disk and process tables.

/// Cursor and page bookkeeping for a table of `len` rows.
///
/// A `page_size` of 0 shows every row on a single page. Page and cursor moves
/// wrap around at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pager {
    len: usize,
    page_size: usize,
    /// Highlighted row, absolute index.
    cursor: usize,
}

impl Pager {
    pub fn new(len: usize, page_size: usize) -> Self {
        Self {
            len,
            page_size,
            cursor: 0,
        }
    }

    /// Same pager over a table that now has `len` rows, cursor kept in range.
    pub fn with_rows(self, len: usize, page_size: usize) -> Self {
        Self {
            len,
            page_size,
            cursor: self.cursor.min(len.saturating_sub(1)),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn rows_per_page(&self) -> usize {
        if self.page_size == 0 {
            self.len.max(1)
        } else {
            self.page_size
        }
    }

    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.rows_per_page()).max(1)
    }

    pub fn page_index(&self) -> usize {
        self.cursor / self.rows_per_page()
    }

    /// Row indices visible on the current page.
    pub fn visible(&self) -> std::ops::Range<usize> {
        let per_page = self.rows_per_page();
        let start = self.page_index() * per_page;
        start.min(self.len)..(start + per_page).min(self.len)
    }

    pub fn next_page(self) -> Self {
        self.goto_page((self.page_index() + 1) % self.page_count())
    }

    pub fn prev_page(self) -> Self {
        let pages = self.page_count();
        self.goto_page((self.page_index() + pages - 1) % pages)
    }

    pub fn next_row(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            cursor: (self.cursor + 1) % self.len,
            ..self
        }
    }

    pub fn prev_row(self) -> Self {
        if self.is_empty() {
            return self;
        }
        Self {
            cursor: (self.cursor + self.len - 1) % self.len,
            ..self
        }
    }

    fn goto_page(self, page: usize) -> Self {
        Self {
            cursor: (page * self.rows_per_page()).min(self.len.saturating_sub(1)),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_size_shows_everything() {
        let pager = Pager::new(5, 0);
        assert_eq!(pager.page_count(), 1);
        assert_eq!(pager.visible(), 0..5);
        assert_eq!(pager.next_page().visible(), 0..5);
    }

    #[test]
    fn pages_wrap_both_ways() {
        let pager = Pager::new(5, 2);
        assert_eq!(pager.page_count(), 3);
        assert_eq!(pager.visible(), 0..2);

        let last = pager.prev_page();
        assert_eq!(last.page_index(), 2);
        assert_eq!(last.visible(), 4..5);

        assert_eq!(last.next_page().page_index(), 0);
    }

    #[test]
    fn rows_cross_page_boundaries() {
        let pager = Pager::new(4, 2).next_row();
        assert_eq!(pager.page_index(), 0);
        let pager = pager.next_row();
        assert_eq!(pager.cursor(), 2);
        assert_eq!(pager.page_index(), 1);
        assert_eq!(pager.next_row().next_row().cursor(), 0);
        assert_eq!(Pager::new(4, 2).prev_row().cursor(), 3);
    }

    #[test]
    fn empty_table_is_stable() {
        let pager = Pager::new(0, 2);
        assert_eq!(pager.page_count(), 1);
        assert_eq!(pager.visible(), 0..0);
        assert_eq!(pager.next_row(), pager);
        assert_eq!(pager.next_page().cursor(), 0);
    }

    #[test]
    fn shrinking_clamps_cursor() {
        let pager = Pager::new(10, 3).prev_row();
        assert_eq!(pager.cursor(), 9);
        let pager = pager.with_rows(4, 3);
        assert_eq!(pager.cursor(), 3);
        assert_eq!(pager.page_index(), 1);
    }
}
