#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set { field: String, value: String },
    Predict,
    Chat(String),
    Show,
    History,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  set <field> <value>   age, gender, level, country, usage, platform, sleep, relationship
  predict               predict your mind score from the form
  chat <message>        talk to the assistant with your form as context
  show                  print the form and the last prediction
  history               print the chat transcript
  help                  print this help
  quit                  leave";

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "set" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: set <field> <value>".to_string())?;
            Ok(Command::Set {
                field: field.to_string(),
                value: value.trim().to_string(),
            })
        }
        "predict" => Ok(Command::Predict),
        "chat" | "send" => Ok(Command::Chat(rest.to_string())),
        "show" => Ok(Command::Show),
        "history" => Ok(Command::History),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err(String::new()),
        other => Err(format!("Unknown command: {} (try `help`)", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_set_with_multi_word_value() {
        assert_eq!(
            parse("set relationship In Relationship").unwrap(),
            Command::Set {
                field: "relationship".to_string(),
                value: "In Relationship".to_string()
            }
        );
        assert!(parse("set age").is_err());
    }

    #[test]
    fn chat_keeps_message_text() {
        assert_eq!(
            parse("chat how can I sleep better?").unwrap(),
            Command::Chat("how can I sleep better?".to_string())
        );
        assert_eq!(parse("chat").unwrap(), Command::Chat(String::new()));
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse("  predict ").unwrap(), Command::Predict);
        assert_eq!(parse("QUIT").unwrap(), Command::Quit);
        assert!(parse("dance").is_err());
    }
}
