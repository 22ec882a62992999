//! ASCII diagrams of a tree's current shape.
//!
//! The layout is computed over a complete binary grid: level `d` of a tree of
//! height `h` always has `2^d` cells, empty or not, so every parent sits
//! centred above the gap between its two (possible) children. Rows are built
//! from the deepest level up, each followed by enough rows of `/` and `\` to
//! climb to the next level, and the result is flipped so the root comes first.
//!
//! ```text
//!     9
//!    / \
//!   /   \
//!  /     \
//! 1       46
//!        / \
//!      20   68
//! ```

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Display;

use crate::error::{Result, TreeError};
use crate::raw::{Handle, RawTree};

/// Narrowest cell that still leaves room for a connector between neighbours.
const MIN_CELL_WIDTH: usize = 3;

/// Tallest tree the renderer will lay out, whatever the configuration says.
///
/// The bottom row of a tree of height `h` is `2^(h-1)` cells wide and the
/// diagram is about `2^h` lines tall, so each extra level roughly quadruples
/// the memory needed. A chain of 13 single-digit keys takes about 100 MB.
pub const HEIGHT_LIMIT: usize = 13;

/// Layout options for rendered diagrams.
///
/// # Examples
///
/// ```
/// use bough::{BinaryTree, RenderConfig};
///
/// let config = RenderConfig::new().margin(2).empty_message("(no nodes)");
///
/// let empty: BinaryTree<i32> = BinaryTree::new();
/// assert_eq!(empty.render_with(&config).unwrap(), ["  (no nodes)"]);
///
/// let tree = BinaryTree::from([2, 1, 3]);
/// assert_eq!(tree.render_with(&config).unwrap(), ["    2", "   / \\", "  1   3"]);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderConfig {
    empty_message: Cow<'static, str>,
    min_cell_width: usize,
    max_height: usize,
    margin: usize,
}

impl RenderConfig {
    /// The default configuration: `"tree is empty."` for empty trees, cells at
    /// least 3 characters wide, at most [`HEIGHT_LIMIT`] levels, no margin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            empty_message: Cow::Borrowed("tree is empty."),
            min_cell_width: MIN_CELL_WIDTH,
            max_height: HEIGHT_LIMIT,
            margin: 0,
        }
    }

    /// Sets the single line produced for an empty tree.
    #[must_use]
    pub fn empty_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Sets the narrowest cell width. Values below 3 are raised to 3 and even
    /// values are rounded up to the next odd number.
    #[must_use]
    pub fn min_cell_width(mut self, width: usize) -> Self {
        self.min_cell_width = odd(width.max(MIN_CELL_WIDTH));
        self
    }

    /// Sets the tallest tree that will be laid out; taller trees are refused
    /// with [`TreeError::TooTall`]. Values above [`HEIGHT_LIMIT`] are clamped.
    #[must_use]
    pub fn max_height(mut self, height: usize) -> Self {
        self.max_height = height.min(HEIGHT_LIMIT);
        self
    }

    /// Sets the number of spaces placed before every line.
    #[must_use]
    pub fn margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Lays out `tree` as a list of lines, root first.
pub(crate) fn layout<K: Display, V>(tree: &RawTree<K, V>, config: &RenderConfig) -> Result<Vec<String>> {
    let height = tree.height(tree.root());
    if height == 0 {
        return Ok(vec![indent(config.margin, &config.empty_message)]);
    }
    if height > config.max_height {
        tracing::debug!(height, limit = config.max_height, "refusing to render tree");
        return Err(TreeError::TooTall {
            height,
            limit: config.max_height,
        });
    }

    let grid = label_grid(tree, height);
    let widest = grid.iter().flatten().flatten().map(|label| width(label)).max().unwrap_or(0);
    let cell_width = odd(widest).max(config.min_cell_width);

    let mut lines = format_rows(&grid, cell_width);
    lines.reverse();
    trim(&mut lines);

    if config.margin > 0 {
        for line in &mut lines {
            *line = indent(config.margin, line);
        }
    }
    Ok(lines)
}

/// One row of labels per level, `2^depth` cells each, left to right.
///
/// Empty slots propagate two empty children so every level stays complete.
fn label_grid<K: Display, V>(tree: &RawTree<K, V>, height: usize) -> Vec<Vec<Option<String>>> {
    let mut grid = Vec::with_capacity(height);
    let mut level: Vec<Option<Handle>> = vec![tree.root()];

    for depth in 0..height {
        grid.push(
            level
                .iter()
                .map(|slot| slot.map(|handle| tree.node(handle).key().to_string()))
                .collect(),
        );

        if depth + 1 < height {
            level = level
                .iter()
                .flat_map(|slot| match *slot {
                    Some(handle) => {
                        let node = tree.node(handle);
                        [node.left(), node.right()]
                    }
                    None => [None, None],
                })
                .collect();
        }
    }

    grid
}

/// Formats the grid bottom-up: each level's labels, then the connector rows
/// that lead to its parents.
fn format_rows(grid: &[Vec<Option<String>>], cell_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut left_pad = 0;

    for (reversed_depth, level) in grid.iter().rev().enumerate() {
        // Connector rows between this level and its parents; also the
        // horizontal offset of the parents relative to this level.
        let space = (1 << reversed_depth) * (cell_width + 1) / 2 - 1;

        let mut line = String::new();
        for (column, label) in level.iter().enumerate() {
            push_spaces(&mut line, if column == 0 { left_pad } else { left_pad * 2 + 1 });
            match label {
                Some(label) => {
                    let padding = cell_width - width(label);
                    let short = padding / 2;
                    let long = padding - short;
                    // The odd space goes on the side facing the parent.
                    let (before, after) = if column % 2 == 0 { (short, long) } else { (long, short) };
                    push_spaces(&mut line, before);
                    line.push_str(label);
                    push_spaces(&mut line, after);
                }
                None => push_spaces(&mut line, cell_width),
            }
        }
        lines.push(line);

        if level.len() == 1 {
            break;
        }

        for row in 0..space {
            let left_space = space + 1 + row;
            let right_space = space - 1 - row;

            let mut line = String::new();
            for (column, label) in level.iter().enumerate() {
                if column % 2 == 0 {
                    push_spaces(&mut line, if column == 0 { left_space } else { left_space * 2 + 1 });
                    line.push(if label.is_some() { '/' } else { ' ' });
                    push_spaces(&mut line, right_space + 1);
                } else {
                    push_spaces(&mut line, right_space);
                    line.push(if label.is_some() { '\\' } else { ' ' });
                }
            }
            lines.push(line);
        }

        left_pad += space + 1;
    }

    lines
}

/// Strips the leading columns that are blank on every line, then any trailing blanks.
fn trim(lines: &mut [String]) {
    let common = lines
        .iter()
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);

    for line in lines {
        line.drain(..common);
        line.truncate(line.trim_end_matches(' ').len());
    }
}

fn width(label: &str) -> usize {
    label.chars().count()
}

const fn odd(width: usize) -> usize {
    if width % 2 == 0 { width + 1 } else { width }
}

fn push_spaces(line: &mut String, count: usize) {
    line.extend(core::iter::repeat_n(' ', count));
}

fn indent(margin: usize, line: &str) -> String {
    let mut indented = String::with_capacity(margin + line.len());
    push_spaces(&mut indented, margin);
    indented.push_str(line);
    indented
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn tree_of<K: Ord>(keys: impl IntoIterator<Item = K>) -> RawTree<K, ()> {
        let mut tree = RawTree::new();
        for key in keys {
            tree.insert(key, ());
        }
        tree
    }

    fn lines_of<K: Ord + Display>(keys: impl IntoIterator<Item = K>) -> Vec<String> {
        layout(&tree_of(keys), &RenderConfig::default()).unwrap()
    }

    #[test]
    fn empty_tree_renders_message() {
        assert_eq!(lines_of::<i32>([]), ["tree is empty."]);
    }

    #[test]
    fn single_node_has_no_connectors() {
        assert_eq!(lines_of([5]), ["5"]);
    }

    #[test]
    fn three_nodes() {
        assert_eq!(lines_of([2, 1, 3]), ["  2", " / \\", "1   3"]);
    }

    #[test]
    fn left_chain_keeps_relative_indentation() {
        assert_eq!(lines_of([3, 2, 1]), ["      3", "     /", "    /", "   /", "  2", " /", "1"]);
    }

    #[test]
    fn grid_is_complete_and_ordered_left_to_right() {
        let tree = tree_of([9, 1, 46, 20, 68, 15, 5, 0, 6, 55, 95]);
        let grid = label_grid(&tree, 4);

        let level = |depth: usize| -> Vec<Option<&str>> { grid[depth].iter().map(Option::as_deref).collect() };
        assert_eq!(level(0), [Some("9")]);
        assert_eq!(level(1), [Some("1"), Some("46")]);
        assert_eq!(level(2), [Some("0"), Some("5"), Some("20"), Some("68")]);
        assert_eq!(level(3), [None, None, None, Some("6"), Some("15"), None, Some("55"), Some("95")]);
    }

    #[rstest]
    #[case(&["1"], 3)]
    #[case(&["10"], 3)]
    #[case(&["100"], 3)]
    #[case(&["1000"], 5)]
    #[case(&["12345"], 5)]
    fn cell_width_is_odd_and_at_least_three(#[case] labels: &[&str], #[case] expected: usize) {
        let widest = labels.iter().map(|label| width(label)).max().unwrap_or(0);
        assert_eq!(odd(widest).max(MIN_CELL_WIDTH), expected);
    }

    #[test]
    fn too_tall_tree_is_refused() {
        let tree = tree_of(0..5);
        let config = RenderConfig::new().max_height(4);
        assert_eq!(layout(&tree, &config), Err(TreeError::TooTall { height: 5, limit: 4 }));
    }

    #[rstest]
    #[case(12, 12)]
    #[case(13, 13)]
    #[case(14, 13)]
    #[case(16, 13)]
    #[case(usize::MAX, 13)]
    fn max_height_is_clamped(#[case] requested: usize, #[case] expected: usize) {
        assert_eq!(RenderConfig::new().max_height(requested).max_height, expected);
    }

    #[test]
    fn default_allows_the_full_limit() {
        assert_eq!(RenderConfig::default().max_height, HEIGHT_LIMIT);
    }

    #[test]
    fn chain_past_the_limit_is_refused_whatever_the_request() {
        let tree = tree_of(0..16);
        let config = RenderConfig::new().max_height(16);
        assert_eq!(layout(&tree, &config), Err(TreeError::TooTall { height: 16, limit: HEIGHT_LIMIT }));
    }

    #[test]
    fn min_cell_width_is_normalised() {
        assert_eq!(RenderConfig::new().min_cell_width(0).min_cell_width, 3);
        assert_eq!(RenderConfig::new().min_cell_width(4).min_cell_width, 5);
        assert_eq!(RenderConfig::new().min_cell_width(7).min_cell_width, 7);
    }

    #[test]
    fn wider_cells_spread_the_diagram() {
        let tree = tree_of([2, 1, 3]);
        let config = RenderConfig::new().min_cell_width(5);
        assert_eq!(layout(&tree, &config).unwrap(), ["   2", "  / \\", " /   \\", "1     3"]);
    }

    #[test]
    fn trim_keeps_relative_offsets() {
        let mut lines = vec!["   a  ".to_string(), "  b".to_string(), "    c ".to_string()];
        trim(&mut lines);
        assert_eq!(lines, [" a", "b", "  c"]);
    }
}
