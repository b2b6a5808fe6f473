use crate::dlx::node::{Node, NodeKind};
use crate::errors::{AppError, Result};

/// Arena-backed toroidal doubly linked exact-cover matrix.
///
/// Index 0 in the arena is the sentinel root; indices `1..=column_count` are the column
/// headers in column-id order; everything after that is data nodes, allocated as rows are
/// inserted. Cover/uncover only ever rewrite `u`/`d`/`l`/`r` fields — no allocation occurs
/// once every row has been added.
pub struct Dlx {
    nodes: Vec<Node>,
    root: usize,
    headers: Vec<usize>,
    row_heads: Vec<usize>,
    row_count: usize,
    column_count: usize,
}

impl Dlx {
    pub fn new(column_count: usize) -> Self {
        let mut nodes = Vec::with_capacity(column_count + 1);
        nodes.push(Node {
            kind: NodeKind::Header {
                size: 0,
                col_id: usize::MAX,
            },
            u: 0,
            d: 0,
            l: 0,
            r: 0,
        });

        let mut headers = Vec::with_capacity(column_count);
        let mut prev = 0;
        for col in 0..column_count {
            let idx = nodes.len();
            nodes.push(Node {
                kind: NodeKind::Header {
                    size: 0,
                    col_id: col,
                },
                u: idx,
                d: idx,
                l: prev,
                r: 0,
            });
            nodes[prev].r = idx;
            prev = idx;
            headers.push(idx);
        }
        nodes[prev].r = 0;
        nodes[0].l = prev;

        Dlx {
            nodes,
            root: 0,
            headers,
            row_heads: Vec::new(),
            row_count: 0,
            column_count,
        }
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Adds a new row touching exactly `columns` (ascending, deduplicated by the caller).
    /// Returns the row id, which is `0` for the first row added, `1` for the second, etc.
    pub fn add_row(&mut self, columns: &[usize]) -> Result<usize> {
        if let Some(&col) = columns.iter().find(|&&c| c >= self.column_count) {
            return Err(AppError::ColumnOutOfRange {
                col,
                column_count: self.column_count,
            });
        }

        let row_id = self.row_count;
        let mut first_in_row: Option<usize> = None;

        for &col in columns {
            let header = self.headers[col];
            let idx = self.nodes.len();
            let up = self.nodes[header].u;

            self.nodes.push(Node {
                kind: NodeKind::Data { col, row: row_id },
                u: up,
                d: header,
                l: idx,
                r: idx,
            });
            self.nodes[up].d = idx;
            self.nodes[header].u = idx;
            if let NodeKind::Header { size, .. } = &mut self.nodes[header].kind {
                *size += 1;
            }

            match first_in_row {
                None => first_in_row = Some(idx),
                Some(first) => {
                    let last = self.nodes[first].l;
                    self.nodes[last].r = idx;
                    self.nodes[idx].l = last;
                    self.nodes[idx].r = first;
                    self.nodes[first].l = idx;
                }
            }
        }

        self.row_heads.push(first_in_row.expect("a row must touch at least one column"));
        self.row_count += 1;
        Ok(row_id)
    }

    /// Visits every column `row_id` touches, in row (left-to-right) order.
    pub fn for_each_touched_column(&self, row_id: usize, mut f: impl FnMut(usize)) {
        let start = self.row_heads[row_id];
        let mut n = start;
        loop {
            f(self.col_of(n));
            n = self.nodes[n].r;
            if n == start {
                break;
            }
        }
    }

    /// Same as [`Dlx::for_each_touched_column`] but in reverse (right-to-left) order.
    pub fn for_each_touched_column_rev(&self, row_id: usize, mut f: impl FnMut(usize)) {
        let start = self.row_heads[row_id];
        let mut n = start;
        loop {
            f(self.col_of(n));
            n = self.nodes[n].l;
            if n == start {
                break;
            }
        }
    }

    /// Visits every row currently touching `col`, top-to-bottom.
    pub fn for_each_row_in_column(&self, col: usize, mut f: impl FnMut(usize)) {
        let header = self.headers[col];
        let mut n = self.nodes[header].d;
        while n != header {
            f(self.row_of(n));
            n = self.nodes[n].d;
        }
    }

    /// Same as [`Dlx::for_each_row_in_column`] but bottom-to-top.
    pub fn for_each_row_in_column_rev(&self, col: usize, mut f: impl FnMut(usize)) {
        let header = self.headers[col];
        let mut n = self.nodes[header].u;
        while n != header {
            f(self.row_of(n));
            n = self.nodes[n].u;
        }
    }

    /// Removes column `col` from the header list, and every other row that shares a data
    /// node with one of `col`'s rows from its own columns.
    pub fn cover(&mut self, col: usize) {
        let header = self.headers[col];
        self.unlink_lr(header);

        let mut i = self.nodes[header].d;
        while i != header {
            let mut j = self.nodes[i].r;
            while j != i {
                self.unlink_ud(j);
                j = self.nodes[j].r;
            }
            i = self.nodes[i].d;
        }
    }

    /// Exact reverse of [`Dlx::cover`], walking both lists backwards.
    pub fn uncover(&mut self, col: usize) {
        let header = self.headers[col];

        let mut i = self.nodes[header].u;
        while i != header {
            let mut j = self.nodes[i].l;
            while j != i {
                self.relink_ud(j);
                j = self.nodes[j].l;
            }
            i = self.nodes[i].u;
        }

        self.relink_lr(header);
    }

    /// The currently live column with the fewest rows, ties broken by first encounter
    /// scanning right from the root. `None` means every column has been covered.
    pub fn choose_min(&self) -> Option<usize> {
        let mut c = self.nodes[self.root].r;
        if c == self.root {
            return None;
        }
        let mut best = c;
        let mut best_size = self.size_of(c);
        c = self.nodes[c].r;
        while c != self.root {
            let size = self.size_of(c);
            if size < best_size {
                best = c;
                best_size = size;
            }
            c = self.nodes[c].r;
        }
        Some(self.col_id_of(best))
    }

    pub fn column_size(&self, col: usize) -> usize {
        self.size_of(self.headers[col])
    }

    /// True iff every header's size matches a fresh rebuild and both list families are
    /// circular. Used in tests to confirm `dlx_solve` left the matrix pristine.
    pub fn is_structurally_pristine(&self) -> bool {
        if self.nodes[self.root].l == self.root && self.column_count > 0 {
            return false;
        }
        let mut c = self.nodes[self.root].r;
        let mut seen = 0;
        while c != self.root {
            let header = &self.nodes[c];
            let NodeKind::Header { size, .. } = header.kind else {
                return false;
            };
            let mut count = 0;
            let mut d = self.nodes[c].d;
            while d != c {
                count += 1;
                d = self.nodes[d].d;
            }
            if count != size {
                return false;
            }
            seen += 1;
            c = self.nodes[c].r;
        }
        seen == self.column_count
    }

    pub(crate) fn row_of(&self, idx: usize) -> usize {
        match self.nodes[idx].kind {
            NodeKind::Data { row, .. } => row,
            NodeKind::Header { .. } => unreachable!("header node has no row"),
        }
    }

    pub(crate) fn col_of(&self, idx: usize) -> usize {
        match self.nodes[idx].kind {
            NodeKind::Data { col, .. } => col,
            NodeKind::Header { .. } => unreachable!("header node has no column"),
        }
    }

    pub(crate) fn header_of(&self, col: usize) -> usize {
        self.headers[col]
    }

    pub(crate) fn node_r(&self, idx: usize) -> usize {
        self.nodes[idx].r
    }

    pub(crate) fn node_l(&self, idx: usize) -> usize {
        self.nodes[idx].l
    }

    pub(crate) fn node_d(&self, idx: usize) -> usize {
        self.nodes[idx].d
    }

    fn size_of(&self, header: usize) -> usize {
        match self.nodes[header].kind {
            NodeKind::Header { size, .. } => size,
            NodeKind::Data { .. } => unreachable!("expected header node"),
        }
    }

    fn col_id_of(&self, header: usize) -> usize {
        match self.nodes[header].kind {
            NodeKind::Header { col_id, .. } => col_id,
            NodeKind::Data { .. } => unreachable!("expected header node"),
        }
    }

    fn unlink_lr(&mut self, idx: usize) {
        let (l, r) = (self.nodes[idx].l, self.nodes[idx].r);
        self.nodes[l].r = r;
        self.nodes[r].l = l;
    }

    fn relink_lr(&mut self, idx: usize) {
        let (l, r) = (self.nodes[idx].l, self.nodes[idx].r);
        self.nodes[l].r = idx;
        self.nodes[r].l = idx;
    }

    fn unlink_ud(&mut self, idx: usize) {
        let (u, d) = (self.nodes[idx].u, self.nodes[idx].d);
        self.nodes[u].d = d;
        self.nodes[d].u = u;
        if let NodeKind::Data { col, .. } = self.nodes[idx].kind {
            let header = self.headers[col];
            if let NodeKind::Header { size, .. } = &mut self.nodes[header].kind {
                *size -= 1;
            }
        }
    }

    fn relink_ud(&mut self, idx: usize) {
        let (u, d) = (self.nodes[idx].u, self.nodes[idx].d);
        self.nodes[u].d = idx;
        self.nodes[d].u = idx;
        if let NodeKind::Data { col, .. } = self.nodes[idx].kind {
            let header = self.headers[col];
            if let NodeKind::Header { size, .. } = &mut self.nodes[header].kind {
                *size += 1;
            }
        }
    }
}
