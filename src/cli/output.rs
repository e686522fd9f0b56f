/// Fixed user-facing messages written to stdout.
use std::io::{self, Write};

/// Printed when the command completes.
pub const GREETING: &str = "Hello world";

/// Printed when setup or execution fails. Details go to the log.
pub const ERROR_NOTICE: &str = "There was an error setting the command line";

/// Write the greeting to stdout.
pub fn write_greeting() {
    write_line(&mut io::stdout().lock(), GREETING);
}

/// Write the generic failure notice to stdout.
pub fn write_error_notice() {
    write_line(&mut io::stdout().lock(), ERROR_NOTICE);
}

// A closed stdout is not worth failing over.
fn write_line(out: &mut impl Write, line: &str) {
    let _ = writeln!(out, "{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_line_appends_newline() {
        let mut buf = Vec::new();
        write_line(&mut buf, GREETING);
        assert_eq!(buf, b"Hello world\n");
    }
}
