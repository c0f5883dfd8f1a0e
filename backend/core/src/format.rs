//! Message template and cause rendering.
//!
//! Templates use `{}` positional placeholders: placeholders are consumed
//! left to right, unmatched placeholders stay literal, and excess arguments
//! are ignored. Causes are rendered to a string once, before a record
//! reaches any sink.

use std::error::Error;
use std::fmt::{Display, Write as _};

/// Substitute positional arguments into a `{}` template.
pub fn render(template: &str, args: &[&dyn Display]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut rest = template;
    let mut next = args.iter();

    while let Some(pos) = rest.find("{}") {
        let Some(arg) = next.next() else {
            // Arguments exhausted; remaining placeholders stay literal.
            break;
        };
        out.push_str(&rest[..pos]);
        // Display into a String cannot fail.
        let _ = write!(out, "{arg}");
        rest = &rest[pos + 2..];
    }

    out.push_str(rest);
    out
}

/// Render an error and its `source()` chain into a trailing cause block.
///
/// The first line is the error itself; each source link follows on its own
/// `caused by:` line. The result always ends with a newline so it can be
/// appended directly after a formatted log line.
pub fn render_cause(err: &dyn Error) -> String {
    let mut out = format!("{err}\n");
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(out, "caused by: {cause}");
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogError;

    #[test]
    fn test_render_two_args() {
        assert_eq!(render("{} and {}", &[&"a", &"b"]), "a and b");
    }

    #[test]
    fn test_render_zero_args_leaves_placeholder_literal() {
        assert_eq!(render("{}", &[]), "{}");
        assert_eq!(render("no placeholders", &[]), "no placeholders");
    }

    #[test]
    fn test_render_fewer_args_than_placeholders() {
        assert_eq!(render("{} then {}", &[&1]), "1 then {}");
    }

    #[test]
    fn test_render_excess_args_ignored() {
        assert_eq!(render("only {}", &[&"one", &"two"]), "only one");
    }

    #[test]
    fn test_render_mixed_arg_types() {
        assert_eq!(render("{}={} ({})", &[&"count", &42, &3.5]), "count=42 (3.5)");
    }

    #[test]
    fn test_render_cause_single() {
        let err = LogError::EmptySource;
        let rendered = render_cause(&err);
        assert_eq!(rendered, format!("{err}\n"));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_render_cause_chain() {
        #[derive(Debug)]
        struct Outer(std::io::Error);
        impl std::fmt::Display for Outer {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "open failed")
            }
        }
        impl std::error::Error for Outer {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                Some(&self.0)
            }
        }

        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let rendered = render_cause(&err);
        assert!(rendered.starts_with("open failed\n"));
        assert!(rendered.contains("caused by: denied"));
    }
}
