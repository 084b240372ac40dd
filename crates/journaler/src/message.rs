//! Message body rendering
//!
//! Substitution values are always passed as one slice, possibly empty, and
//! rendered by a single algorithm.

use std::fmt::{self, Display, Write};

/// Substitution values for a message template
pub type Args<'a> = &'a [&'a dyn Display];

/// Render `template` against `args` into `out`.
///
/// - no values: the template is written verbatim
/// - empty template: the values, separated by spaces
/// - otherwise `{}` takes the next value and `{{` / `}}` are literal braces;
///   unfilled placeholders stay `{}` and leftover values are appended
pub fn render_into(out: &mut String, template: &str, args: Args<'_>) {
    // String's fmt::Write never fails
    let _ = write_body(out, template, args);
}

/// Render `template` against `args` into a new string
pub fn render(template: &str, args: Args<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    render_into(&mut out, template, args);
    out
}

fn write_body(out: &mut String, template: &str, args: Args<'_>) -> fmt::Result {
    if args.is_empty() {
        out.push_str(template);
        return Ok(());
    }

    let mut values = args.iter();

    if !template.is_empty() {
        let mut chars = template.chars().peekable();
        while let Some(c) = chars.next() {
            match (c, chars.peek()) {
                ('{', Some('{')) | ('}', Some('}')) => {
                    chars.next();
                    out.push(c);
                }
                ('{', Some('}')) => {
                    chars.next();
                    match values.next() {
                        Some(value) => write!(out, "{}", value)?,
                        None => out.push_str("{}"),
                    }
                }
                _ => out.push(c),
            }
        }
    }

    let mut leftover = values.peekable();
    if template.is_empty() {
        if let Some(first) = leftover.next() {
            write!(out, "{}", first)?;
        }
    }
    for value in leftover {
        write!(out, " {}", value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_is_verbatim() {
        assert_eq!(render("Database entry posted", &[]), "Database entry posted");
        assert_eq!(render("100% {} {{x}}", &[]), "100% {} {{x}}");
        assert_eq!(render("", &[]), "");
    }

    #[test]
    fn test_single_and_many_args() {
        assert_eq!(render("CPU at {}*C", &[&40]), "CPU at 40*C");
        assert_eq!(
            render("{} of {} nodes {}", &[&3, &5, &"up"]),
            "3 of 5 nodes up"
        );
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(render("{{{}}}", &[&"x"]), "{x}");
        assert_eq!(render("map {{}} -> {}", &[&1]), "map {} -> 1");
    }

    #[test]
    fn test_mismatched_args() {
        assert_eq!(render("{} and {}", &[&"one"]), "one and {}");
        assert_eq!(render("only {}", &[&1, &2, &3]), "only 1 2 3");
        assert_eq!(render("no placeholder", &[&"extra"]), "no placeholder extra");
        // lone braces pass through
        assert_eq!(render("{ {x} }", &[&1]), "{ {x} } 1");
    }

    #[test]
    fn test_empty_template_lists_values() {
        assert_eq!(render("", &[&"foo"]), "foo");
        assert_eq!(render("", &[&"foo", &"bar"]), "foo bar");
    }
}
