//! Interactive collection of the resize request.
//!
//! Three sequential prompts: input path, output path, percentage. Paths are
//! accepted as-is; the percentage is re-prompted until it parses as a number
//! strictly between 0 and 100. The loop is unbounded — an interactive user
//! eventually types something valid — but a closed input stream is an I/O
//! error rather than a spin.
//!
//! Reader and writer are generic so tests can drive the prompts from a
//! `Cursor` and capture everything written.

use crate::types::ResizeRequest;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Why a percentage string was rejected. The `Display` text is the exact
/// message shown to the user before re-prompting.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PercentageError {
    #[error("Invalid input. Please enter a numerical value for the percentage.")]
    NotNumeric,
    #[error("The resizing percentage must be greater than 0 and less than 100.")]
    OutOfRange,
}

/// Parse a percentage string, accepting only numbers strictly inside (0, 100).
///
/// Both bounds are exclusive: 0 would produce an empty image and 100 is the
/// pass-through the tool reserves for explicit non-interactive use. NaN
/// fails both comparisons and lands in `OutOfRange`.
pub fn parse_percentage(text: &str) -> Result<f64, PercentageError> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| PercentageError::NotNumeric)?;

    if value > 0.0 && value < 100.0 {
        Ok(value)
    } else {
        Err(PercentageError::OutOfRange)
    }
}

/// Run the three prompts and return a validated [`ResizeRequest`].
///
/// Invalid percentage input prints the corresponding [`PercentageError`]
/// message and re-prompts; path answers are taken verbatim (minus the line
/// ending). Returns an error only for I/O failures, including end of input.
pub fn collect_request<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> io::Result<ResizeRequest> {
    let input = prompt_line(reader, writer, "Enter the path to the input JPG image: ")?;
    let output = prompt_line(
        reader,
        writer,
        "Enter the path to save the resized image (including the .jpg filename): ",
    )?;

    let percentage = loop {
        let answer = prompt_line(
            reader,
            writer,
            "Enter the resizing percentage (e.g. 50 for 50%): ",
        )?;
        match parse_percentage(&answer) {
            Ok(value) => break value,
            Err(error) => writeln!(writer, "{error}")?,
        }
    };

    Ok(ResizeRequest {
        input: input.into(),
        output: output.into(),
        percentage,
    })
}

/// Print a prompt (no newline), flush, and read one line of input.
fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before all values were provided",
        ));
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::Path;

    fn collect(input: &str) -> (io::Result<ResizeRequest>, String) {
        let mut reader = Cursor::new(input.to_string());
        let mut written = Vec::new();
        let result = collect_request(&mut reader, &mut written);
        (result, String::from_utf8(written).unwrap())
    }

    #[test]
    fn parse_accepts_strict_interior() {
        assert_eq!(parse_percentage("50"), Ok(50.0));
        assert_eq!(parse_percentage("75.5"), Ok(75.5));
        assert_eq!(parse_percentage("0.1"), Ok(0.1));
        assert_eq!(parse_percentage("99.9"), Ok(99.9));
    }

    #[test]
    fn parse_rejects_bounds_and_beyond() {
        assert_eq!(parse_percentage("0"), Err(PercentageError::OutOfRange));
        assert_eq!(parse_percentage("100"), Err(PercentageError::OutOfRange));
        assert_eq!(parse_percentage("150"), Err(PercentageError::OutOfRange));
        assert_eq!(parse_percentage("-5"), Err(PercentageError::OutOfRange));
        assert_eq!(parse_percentage("NaN"), Err(PercentageError::OutOfRange));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert_eq!(parse_percentage("abc"), Err(PercentageError::NotNumeric));
        assert_eq!(parse_percentage(""), Err(PercentageError::NotNumeric));
        assert_eq!(parse_percentage("50%"), Err(PercentageError::NotNumeric));
    }

    #[test]
    fn collects_all_three_values() {
        let (result, _) = collect("in.jpg\nout/resized.jpg\n50\n");
        let request = result.unwrap();
        assert_eq!(request.input, Path::new("in.jpg"));
        assert_eq!(request.output, Path::new("out/resized.jpg"));
        assert_eq!(request.percentage, 50.0);
    }

    #[test]
    fn paths_are_taken_verbatim() {
        // No validation at this layer — even a name with spaces passes through
        let (result, _) = collect("my photos/a picture.jpg\nout.png\n25\n");
        let request = result.unwrap();
        assert_eq!(request.input, Path::new("my photos/a picture.jpg"));
        assert_eq!(request.output, Path::new("out.png"));
    }

    #[test]
    fn loops_until_percentage_is_valid() {
        let (result, written) = collect("in.jpg\nout.jpg\nabc\n100\n0\n75.5\n");
        let request = result.unwrap();
        assert_eq!(request.percentage, 75.5);

        assert_eq!(written.matches("Invalid input").count(), 1);
        assert_eq!(
            written
                .matches("must be greater than 0 and less than 100")
                .count(),
            2
        );
        // Three initial prompts + three re-prompts after rejections
        assert_eq!(written.matches("Enter the resizing percentage").count(), 4);
    }

    #[test]
    fn closed_input_is_an_error_not_a_spin() {
        let (result, _) = collect("in.jpg\nout.jpg\n");
        let err = result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn windows_line_endings_are_stripped() {
        let (result, _) = collect("in.jpg\r\nout.jpg\r\n40\r\n");
        let request = result.unwrap();
        assert_eq!(request.input, Path::new("in.jpg"));
        assert_eq!(request.percentage, 40.0);
    }
}
