use csv::ReaderBuilder;

/// A line needs at least an identifier and a title to become a course.
pub const MIN_FIELDS: usize = 2;

/// Splits one raw line into its comma-separated fields.
///
/// Each line is parsed as its own single-record document so a malformed line
/// can never desynchronize the lines after it. Quoting is disabled: the
/// course file format has no escaping, so a quote is an ordinary byte and
/// fields are cut on every comma. Empty fields are kept, nothing is trimmed.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => record.iter().map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Returns the fields of a well-formed line, or `None` when the line has
/// fewer than [`MIN_FIELDS`] fields and must be skipped.
pub fn parse_line(line: &str) -> Option<Vec<String>> {
    let fields = split_fields(line);
    if fields.len() >= MIN_FIELDS {
        Some(fields)
    } else {
        None
    }
}
