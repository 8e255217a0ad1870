use crate::artifacts::diff::diff_item::DiffItem;
use derive_new::new;

/// Myers' shortest-edit-script diff over two line sequences.
///
/// Works on any `Eq` items; the diff commands run it over interned line ids
/// so comparisons are O(1). The forward pass records a trace of furthest
/// reaching points, the backtrack replays it into single-step moves, and
/// `diff_items` folds those moves into maximal replace/insert/delete runs.
/// Equal runs are never emitted. Tie-breaking between a deletion and an
/// insertion that reach the same point is fixed (the deletion branch wins
/// only when it reaches strictly further), so results are stable under
/// retest.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    base: &'d [T],
    other: &'d [T],
}

impl<'d, T: Eq> MyersDiff<'d, T> {
    fn compute_shortest_edit(&self) -> Vec<Vec<isize>> {
        let (n, m) = (self.base.len() as isize, self.other.len() as isize);
        if n + m == 0 {
            // two empty sequences need no edit path at all
            return Vec::new();
        }

        let offset = (n + m) as usize;

        let mut v = vec![0isize; 2 * offset + 1];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v.clone());

            for k in (-d..=d).step_by(2) {
                let idx = (offset as isize + k) as usize;

                let mut x = if k == -d {
                    // we could have only come from k+1, thus an insertion
                    v[idx + 1]
                } else if k == d {
                    // we could have only come from k-1, thus a deletion
                    v[idx - 1] + 1
                } else {
                    let x_del = v[idx - 1] + 1;
                    let x_ins = v[idx + 1];
                    if x_del > x_ins { x_del } else { x_ins }
                };

                let mut y = x - k;
                while x < n && y < m && self.base[x as usize] == self.other[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    /// Single-step moves `(prev_x, prev_y, x, y)` of the shortest edit path,
    /// ordered from the end of the files back to the start.
    fn backtrack(&self) -> Vec<(isize, isize, isize, isize)> {
        let (mut x, mut y) = (self.base.len() as isize, self.other.len() as isize);
        let offset = (x + y) as usize;
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit();

        for (d, v) in trace.iter().enumerate().rev() {
            let k = x - y;

            let prev_k = if k == -(d as isize) {
                k + 1
            } else if k == (d as isize) {
                k - 1
            } else {
                let k_del = k - 1;
                let k_ins = k + 1;
                if v[(offset as isize + k_del) as usize] + 1 > v[(offset as isize + k_ins) as usize]
                {
                    k_del
                } else {
                    k_ins
                }
            };

            let prev_x = v[(offset as isize + prev_k) as usize];
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edit_path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        edit_path
    }

    /// The minimal ordered edit script between base and other, as
    /// replace/insert/delete runs sorted by `base_line_start`.
    pub fn diff_items(&self) -> Vec<DiffItem> {
        let (n, m) = (self.base.len() as isize, self.other.len() as isize);
        let mut path = self.backtrack();
        path.reverse();

        let mut items: Vec<DiffItem> = Vec::new();
        let mut open: Option<DiffItem> = None;

        for (prev_x, prev_y, x, y) in path {
            if x > prev_x && y > prev_y {
                // equal lines close the current run
                if let Some(item) = open.take() {
                    items.push(item);
                }
                continue;
            }

            if y == prev_y && (0..n).contains(&prev_x) {
                let run = open
                    .get_or_insert_with(|| DiffItem::new(prev_x as usize, prev_y as usize, 0, 0));
                run.base_affected_lines += 1;
            } else if x == prev_x && (0..m).contains(&prev_y) {
                let run = open
                    .get_or_insert_with(|| DiffItem::new(prev_x as usize, prev_y as usize, 0, 0));
                run.other_affected_lines += 1;
            }
        }

        if let Some(item) = open.take() {
            items.push(item);
        }

        items
    }
}
