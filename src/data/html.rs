//! Just enough HTML to pull tabular data out of one stats page.
//!
//! Tag-block slicing over the raw document, no DOM. Nested tables are not
//! handled; the source page keeps its stat tables flat.

/// Find the next `<open ...>…</close>` block at or after `from`.
/// Returns byte offsets of the whole block, close tag included.
fn next_block(doc: &str, open: &str, close: &str, from: usize) -> Option<(usize, usize)> {
    let lower = doc.to_ascii_lowercase();
    let start = lower.get(from..)?.find(open)? + from;
    let open_end = doc[start..].find('>')? + start + 1;
    let end_rel = lower[open_end..].find(close)?;
    Some((start, open_end + end_rel + close.len()))
}

/// Content between the end of a block's open tag and its close tag.
fn block_inner<'a>(doc: &'a str, block: (usize, usize), close: &str) -> &'a str {
    let (start, end) = block;
    let open_end = doc[start..end].find('>').map(|i| start + i + 1).unwrap_or(start);
    &doc[open_end..end - close.len()]
}

/// Inner HTML of every `<table>` in the document, in document order.
pub fn tables(doc: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(block) = next_block(doc, "<table", "</table>", pos) {
        out.push(block_inner(doc, block, "</table>"));
        pos = block.1;
    }
    out
}

/// Cell text for every `<tr>` in a table, in document order.
///
/// Both `<th>` and `<td>` count as cells — the source page puts the rank
/// cell of each body row in a row-scoped `<th>`. Cell text is stripped of
/// markup, entity-decoded and whitespace-normalized.
pub fn rows(table: &str) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(tr) = next_block(table, "<tr", "</tr>", pos) {
        let tr_inner = block_inner(table, tr, "</tr>");
        out.push(row_cells(tr_inner));
        pos = tr.1;
    }
    out
}

/// Cells of one row: the earlier of the next `<th>`/`<td>` block, repeatedly.
fn row_cells(tr_inner: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    loop {
        let th = next_block(tr_inner, "<th", "</th>", pos);
        let td = next_block(tr_inner, "<td", "</td>", pos);
        let (block, close) = match (th, td) {
            (Some(a), Some(b)) if a.0 < b.0 => (a, "</th>"),
            (_, Some(b)) => (b, "</td>"),
            (Some(a), None) => (a, "</th>"),
            (None, None) => break,
        };
        let inner = block_inner(tr_inner, block, close);
        cells.push(normalize_ws(&decode_entities(&strip_tags(inner))));
        pos = block.1;
    }
    cells
}

/// Drop everything between `<` and `>`.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Decode the handful of entities the source page actually emits.
pub fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = true;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_tags_removes_markup() {
        assert_eq!(strip_tags("<a href=\"x\">LeBron James</a>"), "LeBron James");
        assert_eq!(strip_tags("plain"), "plain");
    }

    #[test]
    fn decode_entities_common_cases() {
        assert_eq!(decode_entities("Smith &amp; Sons"), "Smith & Sons");
        assert_eq!(decode_entities("O&#39;Neal"), "O'Neal");
        assert_eq!(decode_entities("a&nbsp;b"), "a b");
    }

    #[test]
    fn normalize_ws_collapses_runs() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn tables_returns_each_table_in_order() {
        let doc = "<html><table id=\"a\"><tr><td>1</td></tr></table>\
                   <p>x</p><TABLE><tr><td>2</td></tr></TABLE></html>";
        let found = tables(doc);
        assert_eq!(found.len(), 2);
        assert!(found[0].contains(">1<"));
        assert!(found[1].contains(">2<"));
    }

    #[test]
    fn rows_mixes_th_and_td_cells_in_order() {
        let table = "<thead><tr><th>Rk</th><th>Player</th></tr></thead>\
                     <tbody><tr><th scope=\"row\">1</th>\
                     <td><a href=\"/p\">Joel&nbsp;Embiid</a></td></tr></tbody>";
        let rows = rows(table);
        assert_eq!(rows, vec![
            vec!["Rk".to_string(), "Player".to_string()],
            vec!["1".to_string(), "Joel Embiid".to_string()],
        ]);
    }

    #[test]
    fn rows_on_empty_table_is_empty() {
        assert!(rows("<caption>no rows</caption>").is_empty());
    }
}
