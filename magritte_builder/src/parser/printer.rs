use terminal_size::{terminal_size, Width};

use crate::api::Parameter;
use crate::parser::base::Parser;
use crate::parser::interface::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const INDENT: &str = "    ";
const PADDING_WIDTH: usize = 3;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const MINIMUM_WIDTH: usize = 17;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HelpEntry {
    spellings: Vec<String>,
    type_name: String,
    help: Option<String>,
    default: Option<String>,
}

impl HelpEntry {
    pub(crate) fn new(
        spellings: Vec<String>,
        type_name: impl Into<String>,
        help: Option<String>,
        default: Option<String>,
    ) -> Self {
        Self {
            spellings,
            type_name: type_name.into(),
            help,
            default,
        }
    }

    fn left(&self) -> String {
        format!("{}:", self.spellings.join(", "))
    }
}

pub(crate) struct Printer {
    program: String,
    about: Option<String>,
    entries: Vec<HelpEntry>,
    terminal_width: Option<usize>,
}

impl Printer {
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::new("program", None, Vec::default(), None)
    }

    pub(crate) fn terminal(
        program: impl Into<String>,
        about: Option<String>,
        parser: &Parser,
    ) -> Self {
        let entries = parser
            .parameters()
            .iter()
            .map(|parameter| {
                entry(
                    parameter,
                    parser
                        .spellings(parameter.name())
                        .into_iter()
                        .map(ToString::to_string)
                        .collect(),
                )
            })
            .collect();

        Self::new(program, about, entries, terminal_width())
    }

    /// The help for parameters which failed configuration, and so have no spellings.
    /// Each parameter is listed by its name.
    pub(crate) fn unresolved(
        program: impl Into<String>,
        about: Option<String>,
        parameters: &[Parameter],
    ) -> Self {
        let entries = parameters
            .iter()
            .map(|parameter| entry(parameter, vec![parameter.name().to_string()]))
            .collect();

        Self::new(program, about, entries, terminal_width())
    }

    pub(crate) fn new(
        program: impl Into<String>,
        about: Option<String>,
        entries: Vec<HelpEntry>,
        terminal_width: Option<usize>,
    ) -> Self {
        Self {
            program: program.into(),
            about,
            entries,
            terminal_width,
        }
    }

    /// Render the help message, one line per item.
    pub(crate) fn render(&self) -> Vec<String> {
        let mut out = Vec::default();

        match &self.about {
            Some(about) => {
                out.push(format!("{}:", self.program));

                for line in self.wrap(about, 1) {
                    out.push(format!("{INDENT}{line}"));
                }
            }
            None => out.push(self.program.clone()),
        }

        out.push("Arguments:".to_string());
        let left_width = self
            .entries
            .iter()
            .map(|entry| entry.left().chars().count())
            .max()
            .unwrap_or(0);

        for entry in &self.entries {
            let left = entry.left();
            // Pad by characters, since the spellings derive from arbitrary names.
            let padding = left_width - left.chars().count() + PADDING_WIDTH;
            out.push(format!(
                "{INDENT}{left}{:padding$}{}",
                "", entry.type_name
            ));

            if let Some(help) = &entry.help {
                for line in self.wrap(help, 2) {
                    out.push(format!("{INDENT}{INDENT}{line}"));
                }
            }

            if let Some(default) = &entry.default {
                out.push(format!("{INDENT}{INDENT}Default: {default}"));
            }
        }

        out
    }

    pub(crate) fn print_help(&self, user_interface: &(impl UserInterface + ?Sized)) {
        for line in self.render() {
            user_interface.print(line);
        }
    }

    fn wrap(&self, paragraph: &str, depth: usize) -> Vec<String> {
        match &self.terminal_width {
            Some(tw) => {
                let width = std::cmp::max(tw.saturating_sub(INDENT.len() * depth), MINIMUM_WIDTH);
                chunk(paragraph, width)
            }
            None => vec![paragraph.to_string()],
        }
    }
}

fn terminal_width() -> Option<usize> {
    let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
        Some(terminal_width as usize)
    } else {
        None
    };

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Terminal width: {terminal_width:?}.");
    }

    terminal_width
}

fn entry(parameter: &Parameter, spellings: Vec<String>) -> HelpEntry {
    // A parameter without help is described by its name.
    let help = parameter.help_text().unwrap_or(parameter.name());

    HelpEntry::new(
        spellings,
        parameter.descriptor().to_string(),
        Some(help.to_string()),
        parameter.default_value().map(ToString::to_string),
    )
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() < width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while characters.len() - left > width {
        let part: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{part}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

/// The input tokens, with a caret under the token at fault.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    /// `offset` is the index of the token at fault; it may point past the final token.
    pub(crate) fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        let column: usize = self
            .tokens
            .iter()
            .take(self.offset)
            .map(|token| token.chars().count() + 1)
            .sum();

        write!(
            f,
            "{projection}\n{:width$}^",
            "",
            width = std::cmp::min(column, projection.chars().count())
        )
    }
}
