//! # Console Output Helpers
//!
//! Formatting helpers for CLI programs. Every `print_*` function writes to
//! stdout through its `write_*` twin, which accepts any [`Write`] sink.

use crate::utils::numeric::Integer;
use std::{
    fmt::Display,
    io::{self, Write},
};

/// Writes `prefix + value + suffix`, followed by a newline when `newline` is set.
pub fn write_value<T: Display, W: Write>(
    out: &mut W,
    value: &T,
    prefix: &str,
    suffix: &str,
    newline: bool,
) -> io::Result<()> {
    write!(out, "{}{}{}", prefix, value, suffix)?;
    if newline {
        writeln!(out)?;
    }
    out.flush()
}

pub fn print_value<T: Display>(value: &T, prefix: &str, suffix: &str, newline: bool) -> io::Result<()> {
    write_value(&mut io::stdout().lock(), value, prefix, suffix, newline)
}

/// Options for [`write_range`].
#[derive(Debug, Clone)]
pub struct RangeOptions<'a> {
    /// Printed on its own line before the numbers. Skipped when empty.
    pub header: &'a str,
    pub prefix: &'a str,
    pub suffix: &'a str,
    /// Counts from `n` down to 1 instead of 1 up to `n`.
    pub descending: bool,
}

impl Default for RangeOptions<'_> {
    fn default() -> Self {
        Self {
            header: "Range:",
            prefix: "",
            suffix: "",
            descending: false,
        }
    }
}

/// Writes the integers from 1 to `n`, one per line. Nothing is listed when `n < 1`.
pub fn write_range<T: Integer, W: Write>(out: &mut W, n: T, options: &RangeOptions<'_>) -> io::Result<()> {
    if !options.header.is_empty() {
        writeln!(out, "{}", options.header)?;
    }

    if n < T::ONE {
        return Ok(());
    }

    if options.descending {
        let mut i = n;
        loop {
            writeln!(out, "{}{}{}", options.prefix, i, options.suffix)?;
            if i == T::ONE {
                break;
            }
            i = i - T::ONE;
        }
    } else {
        let mut i = T::ONE;
        loop {
            writeln!(out, "{}{}{}", options.prefix, i, options.suffix)?;
            if i == n {
                break;
            }
            i = i + T::ONE;
        }
    }
    Ok(())
}

pub fn print_range<T: Integer>(n: T, options: &RangeOptions<'_>) -> io::Result<()> {
    write_range(&mut io::stdout().lock(), n, options)
}

/// Writes `prefix + message + ": " + value + suffix` as one line.
pub fn write_result<T: Display, W: Write>(
    out: &mut W,
    value: &T,
    message: &str,
    prefix: &str,
    suffix: &str,
) -> io::Result<()> {
    writeln!(out, "{}{}: {}{}", prefix, message, value, suffix)
}

pub fn format_result<T: Display>(value: &T, message: &str, prefix: &str, suffix: &str) -> io::Result<()> {
    write_result(&mut io::stdout().lock(), value, message, prefix, suffix)
}

/// Writes an `n` by `n` multiplication table with tab-separated columns.
///
/// The first line is the column header, starting with `x`; each following line
/// starts with its row number.
pub fn write_multiplication_table<W: Write>(out: &mut W, n: u32) -> io::Result<()> {
    let header: Vec<String> = (1..=n).map(|col| col.to_string()).collect();
    writeln!(out, "x\t{}", header.join("\t"))?;

    for row in 1..=n {
        let cells: Vec<String> = (1..=n)
            .map(|col| (u64::from(row) * u64::from(col)).to_string())
            .collect();
        writeln!(out, "{}\t{}", row, cells.join("\t"))?;
    }
    Ok(())
}

pub fn print_multiplication_table(n: u32) -> io::Result<()> {
    write_multiplication_table(&mut io::stdout().lock(), n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_value() {
        assert_eq!(render(|o| write_value(o, &42, "[", "]", true)), "[42]\n");
        assert_eq!(render(|o| write_value(o, &"x", "", "", false)), "x");
    }

    #[test]
    fn test_write_range_ascending() {
        let out = render(|o| write_range(o, 3, &RangeOptions::default()));
        assert_eq!(out, "Range:\n1\n2\n3\n");
    }

    #[test]
    fn test_write_range_descending_with_affixes() {
        let options = RangeOptions {
            header: "",
            prefix: "#",
            suffix: ".",
            descending: true,
        };
        let out = render(|o| write_range(o, 3u8, &options));
        assert_eq!(out, "#3.\n#2.\n#1.\n");
    }

    #[test]
    fn test_write_range_empty() {
        assert_eq!(render(|o| write_range(o, 0, &RangeOptions::default())), "Range:\n");
        assert_eq!(render(|o| write_range(o, -4i64, &RangeOptions::default())), "Range:\n");
    }

    #[test]
    fn test_write_range_reaches_type_max() {
        let options = RangeOptions {
            header: "",
            ..RangeOptions::default()
        };
        let out = render(|o| write_range(o, u8::MAX, &options));
        assert_eq!(out.lines().count(), 255);
        assert_eq!(out.lines().last(), Some("255"));
    }

    #[test]
    fn test_write_result() {
        let out = render(|o| write_result(o, &3.5, "Half of 7", "> ", " <"));
        assert_eq!(out, "> Half of 7: 3.5 <\n");
    }

    #[test]
    fn test_write_multiplication_table() {
        let out = render(|o| write_multiplication_table(o, 3));
        assert_eq!(out, "x\t1\t2\t3\n1\t1\t2\t3\n2\t2\t4\t6\n3\t3\t6\t9\n");
    }

    #[test]
    fn test_write_multiplication_table_empty() {
        assert_eq!(render(|o| write_multiplication_table(o, 0)), "x\t\n");
    }
}
