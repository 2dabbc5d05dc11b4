//! # Command Parsing Module
//!
//! Parses lines typed at the interactive prompt into [`Command`] values.
//! Command words are matched case-insensitively; arguments keep their
//! original casing (ingredient names are free text).

/// One parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <ingredient>` - add an ingredient to the pantry
    Add(String),
    /// `rm <ingredient>` - remove an ingredient from the pantry
    Remove(String),
    /// `list` - show the current pantry
    List,
    /// `suggest <prefix>` - show catalog suggestions for a prefix
    Suggest(String),
    /// `find` - run the cocktail search
    Find,
    /// `show <n>` - show the nth result in detail (1-based)
    Show(usize),
    /// `clear` - drop results and error, keep the pantry
    Clear,
    /// `help` - show usage
    Help,
    /// `quit` / `exit`
    Quit,
    /// Anything unrecognized, with a message worth echoing back
    Unknown(String),
}

/// Parse one input line.
///
/// Returns `None` for blank lines so the loop can silently re-prompt.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "add" if !rest.is_empty() => Command::Add(rest.to_string()),
        "add" => Command::Unknown("Usage: add <ingredient>".to_string()),
        "rm" | "remove" if !rest.is_empty() => Command::Remove(rest.to_string()),
        "rm" | "remove" => Command::Unknown("Usage: rm <ingredient>".to_string()),
        "list" | "ls" => Command::List,
        "suggest" if !rest.is_empty() => Command::Suggest(rest.to_string()),
        "suggest" => Command::Unknown("Usage: suggest <prefix>".to_string()),
        "find" | "search" => Command::Find,
        "show" => match rest.parse::<usize>() {
            Ok(n) if n >= 1 => Command::Show(n),
            _ => Command::Unknown("Usage: show <result number>".to_string()),
        },
        "clear" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Unknown(format!("Unknown command '{other}'. Type `help`.")),
    };

    Some(command)
}

/// Usage text for the `help` command.
pub const HELP_TEXT: &str = "\
Commands:
  add <ingredient>     add an ingredient to your pantry
  rm <ingredient>      remove an ingredient
  list                 show your pantry
  suggest <prefix>     show up to 10 matching catalog ingredients
  find                 search cocktails for your pantry
  show <n>             show result n in detail
  clear                clear results
  help                 show this help
  quit                 exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_argument_casing() {
        assert_eq!(
            parse_command("ADD Light Rum"),
            Some(Command::Add("Light Rum".to_string()))
        );
    }

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn test_show_requires_a_one_based_index() {
        assert_eq!(parse_command("show 3"), Some(Command::Show(3)));
        assert!(matches!(
            parse_command("show 0"),
            Some(Command::Unknown(_))
        ));
        assert!(matches!(
            parse_command("show five"),
            Some(Command::Unknown(_))
        ));
    }

    #[test]
    fn test_suggest_without_a_prefix_is_a_usage_error() {
        assert_eq!(
            parse_command("suggest"),
            Some(Command::Unknown("Usage: suggest <prefix>".to_string()))
        );
        assert_eq!(
            parse_command("suggest rum"),
            Some(Command::Suggest("rum".to_string()))
        );
    }

    #[test]
    fn test_aliases() {
        assert_eq!(parse_command("search"), Some(Command::Find));
        assert_eq!(parse_command("ls"), Some(Command::List));
        assert_eq!(
            parse_command("remove gin"),
            Some(Command::Remove("gin".to_string()))
        );
        assert_eq!(parse_command("q"), Some(Command::Quit));
    }

    #[test]
    fn test_unknown_command_echoes_the_word() {
        match parse_command("frobnicate") {
            Some(Command::Unknown(msg)) => assert!(msg.contains("frobnicate")),
            other => panic!("unexpected parse: {other:?}"),
        }
    }
}
