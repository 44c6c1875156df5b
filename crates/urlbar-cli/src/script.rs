//! Line-oriented event scripts for replaying a field session.
//!
//! One command per line; `#` starts a comment line. Arguments run to the end
//! of the line, so `type  a` types a space followed by `a`.
//!
//! ```text
//! focus
//! type bra
//! wait 100
//! suggest brave.com
//! right
//! ```

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Focus,
    Blur,
    Type(String),
    Backspace,
    Suggest(Option<String>),
    Left,
    Right,
    Touch,
    Mark(Option<String>),
    Unmark,
    Return,
    Clear,
    HighlightAll,
    SetText(String),
    /// Advance the clock by this many milliseconds, then fire any due request.
    Wait(u64),
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: `{command}` needs an argument")]
    MissingArgument { line: usize, command: String },
    #[error("line {line}: invalid milliseconds `{value}`")]
    InvalidNumber { line: usize, value: String },
}

/// Parse a script into `(line_number, step)` pairs. Line numbers are 1-based.
pub fn parse_script(src: &str) -> Result<Vec<(usize, Step)>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, raw) in src.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() || raw.trim_start().starts_with('#') {
            continue;
        }
        let raw = raw.trim_start();
        let (command, arg) = match raw.split_once(' ') {
            Some((c, a)) => (c, Some(a)),
            None => (raw.trim_end(), None),
        };
        let required = |arg: Option<&str>| {
            arg.map(str::to_string)
                .ok_or_else(|| ScriptError::MissingArgument {
                    line,
                    command: command.to_string(),
                })
        };
        let step = match command {
            "focus" => Step::Focus,
            "blur" => Step::Blur,
            "type" => Step::Type(required(arg)?),
            "backspace" => Step::Backspace,
            "suggest" => Step::Suggest(arg.map(str::to_string)),
            "left" => Step::Left,
            "right" => Step::Right,
            "touch" => Step::Touch,
            "mark" => Step::Mark(arg.map(str::to_string)),
            "unmark" => Step::Unmark,
            "return" => Step::Return,
            "clear" => Step::Clear,
            "highlight-all" => Step::HighlightAll,
            "set-text" => Step::SetText(arg.unwrap_or_default().to_string()),
            "wait" => {
                let value = required(arg)?;
                let ms = value
                    .trim()
                    .parse()
                    .map_err(|_| ScriptError::InvalidNumber { line, value })?;
                Step::Wait(ms)
            }
            other => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    command: other.to_string(),
                })
            }
        };
        steps.push((line, step));
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic_script() {
        let src = "# demo\nfocus\ntype bra\n\nwait 100\nsuggest brave.com\nsuggest\nright\n";
        let steps = parse_script(src).unwrap();
        assert_eq!(
            steps,
            vec![
                (2, Step::Focus),
                (3, Step::Type("bra".to_string())),
                (5, Step::Wait(100)),
                (6, Step::Suggest(Some("brave.com".to_string()))),
                (7, Step::Suggest(None)),
                (8, Step::Right),
            ]
        );
    }

    #[test]
    fn type_argument_is_verbatim() {
        let steps = parse_script("type  a ").unwrap();
        assert_eq!(steps, vec![(1, Step::Type(" a ".to_string()))]);
    }

    #[test]
    fn unknown_command_reports_line() {
        let err = parse_script("focus\njump\n").unwrap_err();
        assert!(matches!(err, ScriptError::UnknownCommand { line: 2, .. }));
        assert_eq!(err.to_string(), "line 2: unknown command `jump`");
    }

    #[test]
    fn missing_argument() {
        let err = parse_script("type").unwrap_err();
        assert!(matches!(err, ScriptError::MissingArgument { line: 1, .. }));
    }

    #[test]
    fn invalid_wait() {
        let err = parse_script("wait soon").unwrap_err();
        assert!(matches!(err, ScriptError::InvalidNumber { line: 1, .. }));
    }
}
