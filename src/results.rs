use std::fmt::{self, Display, Formatter};

/// Minimum number of spaces between the `file:line` prefix and the preview.
pub const BASE_PADDING: usize = 2;

/// One parsed match from ripgrep's `path:line:text` output.
///
/// The line number is kept as text so rendering never reformats what
/// ripgrep emitted (leading zeros, absurdly large numbers).
#[derive(Debug, PartialEq, Eq)]
pub struct MatchRecord {
    file: String,
    line: String,
    preview: String,
    padding: usize,
}

impl MatchRecord {
    fn prefix_len(&self) -> usize {
        self.file.len() + self.line.len()
    }
}

impl Display for MatchRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}{}{}",
            self.file,
            self.line,
            " ".repeat(self.padding),
            self.preview
        )
    }
}

/// Splits a raw output line into its file, line number and preview fields.
///
/// The first two colons are the only delimiters; any further colons belong
/// to the preview. Leading whitespace of the preview is stripped. Returns
/// `None` for lines that do not have the expected shape, including the
/// empty line a trailing newline produces.
fn parse_line(raw: &str) -> Option<(&str, &str, &str)> {
    let (file, rest) = raw.split_once(':')?;
    let (line, preview) = rest.split_once(':')?;

    if file.is_empty() || line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((file, line, preview.trim_start()))
}

/// Parses ripgrep's stdout into aligned records, dropping malformed lines
/// and preserving input order.
pub fn parse_results(output: &str, base_padding: usize) -> Vec<MatchRecord> {
    let mut records: Vec<_> = output
        .lines()
        .filter_map(parse_line)
        .map(|(file, line, preview)| MatchRecord {
            file: file.into(),
            line: line.into(),
            preview: preview.into(),
            padding: base_padding,
        })
        .collect();

    align(&mut records, base_padding);

    records
}

/// Pads every record so the previews start at a common column. Records
/// with the longest `file:line` prefix keep the base padding. Needs the
/// whole set materialized; running it again on aligned records changes
/// nothing.
pub fn align(records: &mut [MatchRecord], base_padding: usize) {
    let longest = records
        .iter()
        .map(MatchRecord::prefix_len)
        .max()
        .unwrap_or(0);

    for record in records.iter_mut() {
        record.padding = base_padding + (longest - record.prefix_len());
    }
}

/// Renders records one per line, newline terminated, in input order.
pub fn render(records: &[MatchRecord]) -> String {
    records.iter().map(|record| format!("{record}\n")).collect()
}
