#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod repl;

#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

/// Finds the line holding byte `position`, returning its 1-based number,
/// its text and the offset of `position` within it.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};
    use crate::Position;

    const SOURCE: &str = "Hello, world!\nlet x = 5;\n\n    let y = @;\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 38).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "    let y = @;\n");
        assert_eq!(line_pos, 12);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position(SOURCE, SOURCE.len() as u32).is_none());
        assert!(super::get_line_at_position("", 0).is_none());
    }

    #[test]
    fn test_format_error() {
        let error = Error::new(
            ErrorImpl::UnrecognisedByte {
                byte: "@".to_string(),
            },
            Position(38, Rc::new("test.lang".to_string())),
        );

        let rendered = super::format_error(&error, SOURCE);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("Error: UnrecognisedByte ("));
        assert_eq!(lines[1], "-> test.lang");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "4 | let y = @;");
        assert_eq!(lines[4], "  | --------^");
    }

    #[test]
    fn test_format_error_inside_indentation() {
        let error: Error = std::io::Error::new(std::io::ErrorKind::Other, "closed").into();

        assert_eq!(
            super::format_error(&error, "  x"),
            "Error: Io\n-> <null>\n  |\n1 | x\n"
        );
    }

    #[test]
    fn test_format_error_without_source_line() {
        let error = Error::new(
            ErrorImpl::Io {
                message: "closed".to_string(),
            },
            Position::null(),
        );

        assert_eq!(
            super::format_error(&error, ""),
            "Error: Io\n-> <null>\n"
        );
    }
}

/// Renders a caret diagnostic for `error` against the source it came from.
pub fn format_error(error: &Error, source: &str) -> String {
    /*
        Error: message
        -> final.lang
          |
        20 | let a = #;
           | --------^
    */

    let position = error.get_position();
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return rendered;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!(
        "{} | {}\n",
        line_string,
        line_text_removed.trim_end()
    ));

    // Positions inside the stripped indentation or mid-character have nowhere to point.
    let Some(before) = line_text.get(removed_whitespace..line_pos) else {
        return rendered;
    };
    let arrows = before.chars().count() + 1;

    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    rendered
}

pub fn display_error(error: &Error, source: &str) {
    print!("{}", format_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
