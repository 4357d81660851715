use unicode_width::UnicodeWidthStr;

/// Returns the terminal cell width of `text`.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Returns the space count that pushes `right` to the right edge of a
/// `total_width` row starting with `left`, or `None` when both do not fit
/// with at least one space between them.
pub fn edge_padding(left: &str, right: &str, total_width: u16) -> Option<usize> {
    let used_width = display_width(left) + display_width(right);
    let total_width = usize::from(total_width);
    if used_width >= total_width {
        return None;
    }

    Some(total_width - used_width)
}
