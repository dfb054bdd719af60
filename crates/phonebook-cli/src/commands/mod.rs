use crate::error::CommandError;
use phonebook_store::{AddressBook, ListOrder};
use std::str::FromStr;

pub mod contacts;

pub use contacts::dispatch;

pub struct Context<'a> {
    pub book: &'a mut AddressBook,
    pub order: ListOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Hello,
    Add,
    Change,
    Phone,
    Delete,
    Search,
    Show,
    All,
    Help,
    Close,
    Exit,
}

pub const VERBS: [Verb; 11] = [
    Verb::Hello,
    Verb::Add,
    Verb::Change,
    Verb::Phone,
    Verb::Delete,
    Verb::Search,
    Verb::Show,
    Verb::All,
    Verb::Help,
    Verb::Close,
    Verb::Exit,
];

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Hello => "hello",
            Verb::Add => "add",
            Verb::Change => "change",
            Verb::Phone => "phone",
            Verb::Delete => "delete",
            Verb::Search => "search",
            Verb::Show => "show",
            Verb::All => "all",
            Verb::Help => "help",
            Verb::Close => "close",
            Verb::Exit => "exit",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Verb::Hello => "hello",
            Verb::Add => "add <name> <phone>",
            Verb::Change => "change <name> <phone>",
            Verb::Phone => "phone <name>",
            Verb::Delete => "delete <name>",
            Verb::Search => "search <pattern>",
            Verb::Show => "show [all|<pattern>]",
            Verb::All => "all",
            Verb::Help => "help",
            Verb::Close => "close",
            Verb::Exit => "exit",
        }
    }

    /// Token counts accepted for this verb, the verb itself included.
    fn accepts(self, tokens: usize) -> bool {
        match self {
            Verb::Add | Verb::Change => tokens == 3,
            Verb::Phone | Verb::Delete | Verb::Search => tokens == 2,
            Verb::Show => tokens == 1 || tokens == 2,
            Verb::Hello | Verb::All | Verb::Help | Verb::Close | Verb::Exit => tokens == 1,
        }
    }
}

impl FromStr for Verb {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        VERBS
            .iter()
            .copied()
            .find(|verb| verb.as_str() == lower)
            .ok_or_else(|| CommandError::UnknownVerb(s.to_string()))
    }
}

pub fn available_verbs() -> String {
    VERBS
        .iter()
        .map(|verb| verb.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    Delete { name: String },
    Search { pattern: String },
    /// `None` lists every contact.
    Show { pattern: Option<String> },
    Help,
    Exit,
}

/// Splits a line into a command. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((first, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let verb = Verb::from_str(first)?;
    if !verb.accepts(tokens.len()) {
        return Err(CommandError::InvalidArity {
            usage: verb.usage(),
        });
    }

    let arg = |index: usize| args[index].to_string();
    let command = match verb {
        Verb::Hello => Command::Hello,
        Verb::Add => Command::Add {
            name: arg(0),
            phone: arg(1),
        },
        Verb::Change => Command::Change {
            name: arg(0),
            phone: arg(1),
        },
        Verb::Phone => Command::Phone { name: arg(0) },
        Verb::Delete => Command::Delete { name: arg(0) },
        Verb::Search => Command::Search { pattern: arg(0) },
        Verb::Show => match args.first() {
            None => Command::Show { pattern: None },
            Some(word) if word.eq_ignore_ascii_case("all") => Command::Show { pattern: None },
            Some(word) => Command::Show {
                pattern: Some(word.to_string()),
            },
        },
        Verb::All => Command::Show { pattern: None },
        Verb::Help => Command::Help,
        Verb::Close | Verb::Exit => Command::Exit,
    };
    Ok(Some(command))
}
