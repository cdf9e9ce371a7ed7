use std::path::PathBuf;

use lexaid::core::glossary::ALL_CATEGORIES;

/// A parsed line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Send(String),
    SendDraft,
    Upload(PathBuf),
    Remove,
    Status,
    Language(Option<String>),
    Quick(Option<usize>),
    Glossary { query: String, category: String },
    Dump,
    Help,
    Quit,
}

pub const HELP: &str = "\
Type a question to ask the assistant (start it with // to begin with a
literal /), or use a command:
  /upload <path>                 upload a PDF, DOC, DOCX or TXT file (max 10MB)
  /remove                        remove the uploaded document
  /status                        show the session state
  /lang [code]                   list languages or pick one, e.g. hi
  /quick [n]                     list suggested questions or draft one
  /send                          send the current draft
  /glossary [query] [@category]  search the legal glossary
  /dump                          print the session state as JSON
  /help                          show this help
  /quit                          leave";

impl Command {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    ///
    /// Anything that is not a command is sent exactly as typed. A leading
    /// `//` sends the rest of the line starting with a single `/`.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Ok(Some(Command::Send(line.to_owned())));
        };
        if rest.starts_with('/') {
            return Ok(Some(Command::Send(line.replacen('/', "", 1))));
        }

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        let arg = (!arg.is_empty()).then_some(arg);

        let command = match (name, arg) {
            ("send", None) => Command::SendDraft,
            ("upload", Some(path)) => Command::Upload(PathBuf::from(path)),
            ("upload", None) => return Err("usage: /upload <path>".to_owned()),
            ("remove", None) => Command::Remove,
            ("status", None) => Command::Status,
            ("lang", code) => Command::Language(code.map(str::to_owned)),
            ("quick", None) => Command::Quick(None),
            ("quick", Some(n)) => match n.parse::<usize>() {
                Ok(n) if n > 0 => Command::Quick(Some(n)),
                _ => return Err(format!("not a question number: {n}")),
            },
            ("glossary", arg) => parse_glossary(arg.unwrap_or("")),
            ("dump", None) => Command::Dump,
            ("help", _) => Command::Help,
            ("quit" | "exit", None) => Command::Quit,
            _ => {
                return Err(format!(
                    "unknown command: /{name} (try /help)"
                ));
            }
        };
        Ok(Some(command))
    }
}

fn parse_glossary(arg: &str) -> Command {
    let (query, category) = match arg.split_once('@') {
        Some((query, category)) => (query.trim(), category.trim()),
        None => (arg, ALL_CATEGORIES),
    };
    let category = if category.is_empty() {
        ALL_CATEGORIES
    } else {
        category
    };
    Command::Glossary {
        query: query.to_owned(),
        category: category.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn test_plain_text_is_sent() {
        assert_eq!(
            parse("  What is force majeure? "),
            Command::Send("  What is force majeure? ".to_owned())
        );
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_double_slash_sends_literal_slash() {
        assert_eq!(
            parse("//etc/fstab is a legal document?"),
            Command::Send("/etc/fstab is a legal document?".to_owned())
        );
        assert_eq!(parse(" //help "), Command::Send(" /help ".to_owned()));
    }

    #[test]
    fn test_commands() {
        assert_eq!(
            parse("/upload  ~/docs/lease agreement.pdf"),
            Command::Upload(PathBuf::from("~/docs/lease agreement.pdf"))
        );
        assert_eq!(parse("/remove"), Command::Remove);
        assert_eq!(parse("/lang"), Command::Language(None));
        assert_eq!(parse("/lang ta"), Command::Language(Some("ta".to_owned())));
        assert_eq!(parse("/quick"), Command::Quick(None));
        assert_eq!(parse("/quick 2"), Command::Quick(Some(2)));
        assert_eq!(parse("/send"), Command::SendDraft);
        assert_eq!(parse("/exit"), Command::Quit);
    }

    #[test]
    fn test_glossary() {
        assert_eq!(
            parse("/glossary"),
            Command::Glossary {
                query: String::new(),
                category: "all".to_owned()
            }
        );
        assert_eq!(
            parse("/glossary indemn"),
            Command::Glossary {
                query: "indemn".to_owned(),
                category: "all".to_owned()
            }
        );
        assert_eq!(
            parse("/glossary @Contract Law"),
            Command::Glossary {
                query: String::new(),
                category: "Contract Law".to_owned()
            }
        );
    }

    #[test]
    fn test_errors() {
        assert!(Command::parse("/upload").is_err());
        assert!(Command::parse("/quick zero").is_err());
        assert!(Command::parse("/quick 0").is_err());
        assert!(Command::parse("/frobnicate").is_err());
        assert!(Command::parse("/remove now").is_err());
    }
}
