use scraper::{Html, Node};

const BLOCK_ELEMENTS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "body",
    "caption",
    "dd",
    "div",
    "dl",
    "dt",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "html",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "tbody",
    "tfoot",
    "thead",
    "ul",
];
const CELL_SEPARATOR: &str = " | ";
const LINE_SEPARATOR: &str = "\n";
const SKIPPED_ELEMENTS: &[&str] = &["head", "noscript", "script", "style", "template"];
const TABLE_CELLS: &[&str] = &["td", "th"];
const TABLE_ROW: &[&str] = &["tr"];
const WORD_SEPARATOR: &str = " ";

/// Where one text node lands in the output, keyed by tree node ids.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Placement<K> {
    /// Inside a table row, optionally within one cell.
    Row { row: K, cell: Option<K> },
    /// Inside the nearest block-level element, or at the document root.
    Block(Option<K>),
}

impl<K: Copy + PartialEq> Placement<K> {
    /// Returns the separator that joins this text to the previous one on
    /// the same line, or `None` when it starts a new line.
    fn separator_after(self, previous: Self) -> Option<&'static str> {
        match (previous, self) {
            (
                Self::Row {
                    row: previous_row,
                    cell: previous_cell,
                },
                Self::Row { row, cell },
            ) if previous_row == row => {
                if previous_cell == cell {
                    Some(WORD_SEPARATOR)
                } else {
                    Some(CELL_SEPARATOR)
                }
            }
            (Self::Block(Some(previous_block)), Self::Block(Some(block)))
                if previous_block == block =>
            {
                Some(WORD_SEPARATOR)
            }
            _ => None,
        }
    }
}

/// Returns the readable text of an HTML report.
///
/// Text inside one block element stays on one line, inline markup such as
/// `<b>` or `<span>` included. Table rows become one line with ` | ` between
/// cells. Whitespace runs collapse to a single space and non-visible
/// elements are skipped.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut lines: Vec<String> = Vec::new();
    let mut previous = None;

    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        if node
            .ancestors()
            .any(|ancestor| is_element_named(ancestor.value(), SKIPPED_ELEMENTS))
        {
            continue;
        }

        let words = text.split_whitespace().collect::<Vec<_>>().join(WORD_SEPARATOR);
        if words.is_empty() {
            continue;
        }

        let nearest = |names: &[&str]| {
            node.ancestors()
                .find(|ancestor| is_element_named(ancestor.value(), names))
                .map(|ancestor| ancestor.id())
        };
        let placement = match nearest(TABLE_ROW) {
            Some(row) => Placement::Row {
                row,
                cell: nearest(TABLE_CELLS),
            },
            None => Placement::Block(nearest(BLOCK_ELEMENTS)),
        };
        let separator = previous.and_then(|previous| placement.separator_after(previous));

        match (lines.last_mut(), separator) {
            (Some(line), Some(separator)) => {
                line.push_str(separator);
                line.push_str(&words);
            }
            _ => lines.push(words),
        }
        previous = Some(placement);
    }

    lines.join(LINE_SEPARATOR)
}

fn is_element_named(node: &Node, names: &[&str]) -> bool {
    matches!(node, Node::Element(element) if names.contains(&element.name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_skips_head_scripts_and_styles() {
        // Arrange
        let html = r"<html>
            <head><title>Backtest</title><style>body { color: red; }</style></head>
            <body>
                <script>window.chart = [1, 2, 3];</script>
                <h1>BotA   backtest</h1>
                <p>Net profit</p>
            </body>
        </html>";

        // Act
        let text = extract_text(html);

        // Assert
        assert_eq!(text, "BotA backtest\nNet profit");
    }

    #[test]
    fn test_extract_text_joins_table_cells_per_row() {
        // Arrange
        let html = r"<table>
            <tr><th>Metric</th><th>Value</th></tr>
            <tr><td>Net Profit</td><td>1 204.50</td></tr>
            <tr><td>Max <b>Drawdown</b></td><td>8.1%</td></tr>
        </table>";

        // Act
        let text = extract_text(html);

        // Assert
        assert_eq!(
            text,
            "Metric | Value\nNet Profit | 1 204.50\nMax Drawdown | 8.1%"
        );
    }

    #[test]
    fn test_extract_text_keeps_inline_markup_on_one_line() {
        // Arrange
        let html = "<p>Net <b>profit</b> was high</p>\
            <table><tr><td>Max <b>Drawdown</b></td><td>8.1%</td></tr></table>";

        // Act
        let text = extract_text(html);

        // Assert
        assert_eq!(text, "Net profit was high\nMax Drawdown | 8.1%");
    }

    #[test]
    fn test_extract_text_breaks_lines_at_nested_blocks() {
        // Arrange
        let html = r#"<div>Summary<p>Trades: <span class="value">42</span></p>Done</div>"#;

        // Act
        let text = extract_text(html);

        // Assert
        assert_eq!(text, "Summary\nTrades: 42\nDone");
    }

    #[test]
    fn test_extract_text_of_empty_document_is_empty() {
        // Arrange & Act
        let text = extract_text("<html><body>   </body></html>");

        // Assert
        assert!(text.is_empty());
    }
}
