use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/next", "Turn to the next page"),
    ("/prev", "Turn back one page"),
    ("/goto", "Jump to a page number"),
    ("/lang", "Read in another language"),
    ("/define", "Look up a word"),
    ("/search", "Search the web for a topic"),
    ("/analyze", "Analyze this document"),
    ("/info", "Show document details"),
    ("/help", "Show available commands"),
    ("/quit", "Close the reader"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types. Argument parsing stays here; a `None` argument
/// means the command was given without one and the session shows usage.
#[derive(Debug, Clone)]
pub enum SlashCommand {
    Next,
    Prev,
    Goto(Option<usize>),
    Lang(Option<String>),
    Define(Option<String>),
    Search(Option<String>),
    Analyze,
    Info,
    Help,
    Quit,
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    let command = match parts.first().copied() {
        Some("next" | "n") => SlashCommand::Next,
        Some("prev" | "p") => SlashCommand::Prev,
        Some("goto") => SlashCommand::Goto(parts.get(1).and_then(|arg| arg.parse().ok())),
        Some("lang") => SlashCommand::Lang(parts.get(1).map(|arg| (*arg).to_string())),
        Some("define") => SlashCommand::Define(parts.get(1).map(|arg| (*arg).to_string())),
        Some("search") => SlashCommand::Search(
            (parts.len() > 1).then(|| parts[1..].join(" ")),
        ),
        Some("analyze") => SlashCommand::Analyze,
        Some("info") => SlashCommand::Info,
        Some("help") => SlashCommand::Help,
        Some("quit" | "exit" | "q") => SlashCommand::Quit,
        _ => SlashCommand::Unknown(parts.join(" ")),
    };

    Input::Command(command)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_input(""), Input::Empty));
        assert!(matches!(parse_input("   "), Input::Empty));
    }

    #[test]
    fn test_parse_text_input() {
        match parse_input("just some reading notes") {
            Input::Text(text) => assert_eq!(text, "just some reading notes"),
            _ => panic!("Expected Input::Text"),
        }
    }

    #[test]
    fn test_parse_navigation_commands() {
        assert!(matches!(
            parse_input("/next"),
            Input::Command(SlashCommand::Next)
        ));
        assert!(matches!(
            parse_input("/n"),
            Input::Command(SlashCommand::Next)
        ));
        assert!(matches!(
            parse_input("/prev"),
            Input::Command(SlashCommand::Prev)
        ));
        assert!(matches!(
            parse_input("/p"),
            Input::Command(SlashCommand::Prev)
        ));
    }

    #[test]
    fn test_parse_goto_with_page_number() {
        assert!(matches!(
            parse_input("/goto 12"),
            Input::Command(SlashCommand::Goto(Some(12)))
        ));
    }

    #[test]
    fn test_parse_goto_without_valid_page() {
        assert!(matches!(
            parse_input("/goto"),
            Input::Command(SlashCommand::Goto(None))
        ));
        assert!(matches!(
            parse_input("/goto twelve"),
            Input::Command(SlashCommand::Goto(None))
        ));
    }

    #[test]
    fn test_parse_lang_command() {
        match parse_input("/lang fr") {
            Input::Command(SlashCommand::Lang(Some(code))) => assert_eq!(code, "fr"),
            _ => panic!("Expected Input::Command(SlashCommand::Lang)"),
        }
        assert!(matches!(
            parse_input("/lang"),
            Input::Command(SlashCommand::Lang(None))
        ));
    }

    #[test]
    fn test_parse_search_joins_query_words() {
        match parse_input("/search rust borrow checker") {
            Input::Command(SlashCommand::Search(Some(query))) => {
                assert_eq!(query, "rust borrow checker");
            }
            _ => panic!("Expected Input::Command(SlashCommand::Search)"),
        }
    }

    #[test]
    fn test_parse_quit_commands() {
        assert!(matches!(
            parse_input("/quit"),
            Input::Command(SlashCommand::Quit)
        ));
        assert!(matches!(
            parse_input("/exit"),
            Input::Command(SlashCommand::Quit)
        ));
        assert!(matches!(
            parse_input("/q"),
            Input::Command(SlashCommand::Quit)
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        match parse_input("/bookmark") {
            Input::Command(SlashCommand::Unknown(cmd)) => assert_eq!(cmd, "bookmark"),
            _ => panic!("Expected Input::Command(SlashCommand::Unknown)"),
        }
    }

    // SlashCommandCompleter tests

    #[test]
    fn test_completer_no_suggestions_for_regular_text() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("hello").unwrap();
        assert!(suggestions.is_empty());
    }

    #[test]
    fn test_completer_suggestions_for_slash() {
        let mut completer = SlashCommandCompleter;
        let suggestions = completer.get_suggestions("/").unwrap();
        assert_eq!(suggestions.len(), SLASH_COMMANDS.len());
    }

    #[test]
    fn test_completer_suggestions_filter_by_prefix() {
        let mut completer = SlashCommandCompleter;

        let suggestions = completer.get_suggestions("/g").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/goto"));

        let suggestions = completer.get_suggestions("/ne").unwrap();
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("/next"));
    }

    #[test]
    fn test_completer_completion() {
        let mut completer = SlashCommandCompleter;
        let suggestion = "/define  Look up a word".to_string();
        let completion = completer.get_completion("/d", Some(suggestion)).unwrap();
        assert_eq!(completion, Some("/define".to_string()));
    }

    #[test]
    fn test_completer_completion_none() {
        let mut completer = SlashCommandCompleter;
        let completion = completer.get_completion("/x", None).unwrap();
        assert!(completion.is_none());
    }
}
