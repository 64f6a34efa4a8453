//! Table-wide column width.
//!
//! Every column of a table is rendered at the same width: the longest cell
//! (or header) plus at least two spaces of padding, rounded up to an even
//! number so that centering splits evenly for even-length text.

const EVEN_LENGTH_ADJUSTMENT: usize = 2;
const ODD_LENGTH_ADJUSTMENT: usize = 3;

/// Number of terminal columns `text` occupies, counting one per character.
#[inline]
#[must_use]
pub fn text_len(text: &str) -> usize { text.chars().count() }

/// Pads the longest length up to the uniform, always even, column width.
#[inline]
#[must_use]
pub const fn padded_width(max_len: usize) -> usize {
    if max_len % 2 == 0 {
        max_len + EVEN_LENGTH_ADJUSTMENT
    } else {
        max_len + ODD_LENGTH_ADJUSTMENT
    }
}

/// Computes the uniform width from already stringified cells.
///
/// `header` is included in the maximum so that a column name longer than
/// all of its values still fits.
#[must_use]
pub fn uniform_width<H, R, C>(header: H, cells: R) -> usize
where
    H: IntoIterator,
    H::Item: AsRef<str>,
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    let header_max = header.into_iter().map(|name| text_len(name.as_ref())).max().unwrap_or(0);
    let cell_max = cells
        .into_iter()
        .flat_map(IntoIterator::into_iter)
        .map(|cell| text_len(cell.as_ref()))
        .max()
        .unwrap_or(0);
    padded_width(header_max.max(cell_max))
}
