use crate::errors::GenerationError;

/// `Index,Data` header followed by one `{1-based index},{line}` row per line.
///
/// Lines are written verbatim, never quoted, so a row's data column is exactly
/// the generated line. The last row is not followed by a newline.
pub fn to_csv(lines: &[String]) -> Result<String, GenerationError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(lines.len() * 32 + 16));

    writer.write_record(["Index", "Data"])?;
    for (index, line) in lines.iter().enumerate() {
        writer.write_record([(index + 1).to_string().as_str(), line.as_str()])?;
    }

    writer.flush()?;
    let mut bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(String::from_utf8(bytes)?)
}
