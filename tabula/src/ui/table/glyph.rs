//! Double-line box-drawing characters used by every rendered table.

pub const HORIZONTAL_LINE: char = '═';
pub const CELL_SEPARATOR: char = '║';

pub const TOP_LEFT_CORNER: char = '╔';
pub const TOP_RIGHT_CORNER: char = '╗';
pub const TOP_SEPARATOR: char = '╦';

pub const BOTTOM_LEFT_CORNER: char = '╚';
pub const BOTTOM_RIGHT_CORNER: char = '╝';
pub const BOTTOM_SEPARATOR: char = '╩';

pub const INNER_LEFT: char = '╠';
pub const INNER_RIGHT: char = '╣';
pub const INNER_SEPARATOR: char = '╬';

pub const PADDING: char = ' ';
pub const NEW_LINE: char = '\n';
