use crate::commands::{Command, Context, VERBS};
use phonebook_core::domain::ContactRecord;
use phonebook_store::error::Result;

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Lines(Vec<String>),
    Farewell,
}

impl Reply {
    fn line(text: impl Into<String>) -> Self {
        Reply::Lines(vec![text.into()])
    }
}

pub fn dispatch(ctx: &mut Context<'_>, command: Command) -> Result<Reply> {
    match command {
        Command::Hello => Ok(Reply::line(GREETING)),
        Command::Add { name, phone } => add_contact(ctx, &name, &phone),
        Command::Change { name, phone } => change_contact(ctx, &name, &phone),
        Command::Phone { name } => show_phones(ctx, &name),
        Command::Delete { name } => delete_contact(ctx, &name),
        Command::Search { pattern } => search_contacts(ctx, &pattern),
        Command::Show { pattern: None } => list_contacts(ctx),
        Command::Show {
            pattern: Some(pattern),
        } => search_contacts(ctx, &pattern),
        Command::Help => Ok(help()),
        Command::Exit => Ok(Reply::Farewell),
    }
}

fn add_contact(ctx: &mut Context<'_>, name: &str, phone: &str) -> Result<Reply> {
    let record = ContactRecord::with_phone(name, phone)?;
    let added = ctx.book.add_record(record)?;
    Ok(Reply::line(format!("Contact added: {}", added)))
}

fn change_contact(ctx: &mut Context<'_>, name: &str, phone: &str) -> Result<Reply> {
    let changed = ctx.book.change_phone(name, phone)?;
    Ok(Reply::line(format!("Contact updated: {}", changed)))
}

fn show_phones(ctx: &Context<'_>, name: &str) -> Result<Reply> {
    let record = ctx.book.find_record(name)?;
    if record.phones.is_empty() {
        return Ok(Reply::line(format!("{} has no phones", record.name)));
    }
    let lines = record
        .phones
        .iter()
        .map(|phone| format!("{}: {}", record.name, phone))
        .collect();
    Ok(Reply::Lines(lines))
}

fn delete_contact(ctx: &mut Context<'_>, name: &str) -> Result<Reply> {
    let removed = ctx.book.delete_record(name)?;
    Ok(Reply::line(format!("Contact deleted: {}", removed.name)))
}

fn search_contacts(ctx: &Context<'_>, pattern: &str) -> Result<Reply> {
    let found = ctx.book.search(pattern)?;
    Ok(Reply::Lines(
        found.iter().map(|record| record.to_string()).collect(),
    ))
}

fn list_contacts(ctx: &Context<'_>) -> Result<Reply> {
    if ctx.book.is_empty() {
        return Ok(Reply::line("no contacts"));
    }
    Ok(Reply::Lines(
        ctx.book
            .list(ctx.order)
            .map(|record| record.to_string())
            .collect(),
    ))
}

fn help() -> Reply {
    let mut lines = vec!["available commands:".to_string()];
    lines.extend(VERBS.iter().map(|verb| format!("  {}", verb.usage())));
    Reply::Lines(lines)
}

#[cfg(test)]
mod tests {
    use super::{dispatch, Reply, GREETING};
    use crate::commands::{Command, Context};
    use phonebook_store::error::StoreErrorKind;
    use phonebook_store::{AddressBook, ListOrder};

    fn add(ctx: &mut Context<'_>, name: &str, phone: &str) {
        dispatch(
            ctx,
            Command::Add {
                name: name.to_string(),
                phone: phone.to_string(),
            },
        )
        .expect("add contact");
    }

    fn lines(reply: Reply) -> Vec<String> {
        match reply {
            Reply::Lines(lines) => lines,
            Reply::Farewell => panic!("unexpected farewell"),
        }
    }

    #[test]
    fn hello_greets() {
        let mut book = AddressBook::new();
        let mut ctx = Context {
            book: &mut book,
            order: ListOrder::ByName,
        };
        let reply = dispatch(&mut ctx, Command::Hello).unwrap();
        assert_eq!(lines(reply), vec![GREETING.to_string()]);
    }

    #[test]
    fn add_then_duplicate_fails() {
        let mut book = AddressBook::new();
        let mut ctx = Context {
            book: &mut book,
            order: ListOrder::ByName,
        };
        add(&mut ctx, "John", "+380992572719");
        let err = dispatch(
            &mut ctx,
            Command::Add {
                name: "John".to_string(),
                phone: "0552-237-519".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::DuplicateContact);
    }

    #[test]
    fn add_with_invalid_phone_leaves_book_empty() {
        let mut book = AddressBook::new();
        let mut ctx = Context {
            book: &mut book,
            order: ListOrder::ByName,
        };
        let err = dispatch(
            &mut ctx,
            Command::Add {
                name: "John".to_string(),
                phone: "123".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::Core);
        assert!(ctx.book.is_empty());
    }

    #[test]
    fn show_lists_in_configured_order() {
        let mut book = AddressBook::new();
        let mut ctx = Context {
            book: &mut book,
            order: ListOrder::ByName,
        };
        add(&mut ctx, "Bob", "0671112233");
        add(&mut ctx, "Amy", "0987654321");

        let sorted = lines(dispatch(&mut ctx, Command::Show { pattern: None }).unwrap());
        assert!(sorted[0].contains("Amy"));
        assert!(sorted[1].contains("Bob"));

        ctx.order = ListOrder::Insertion;
        let inserted = lines(dispatch(&mut ctx, Command::Show { pattern: None }).unwrap());
        assert!(inserted[0].contains("Bob"));
        assert!(inserted[1].contains("Amy"));
    }

    #[test]
    fn show_empty_book_is_not_an_error() {
        let mut book = AddressBook::new();
        let mut ctx = Context {
            book: &mut book,
            order: ListOrder::ByName,
        };
        let reply = dispatch(&mut ctx, Command::Show { pattern: None }).unwrap();
        assert_eq!(lines(reply), vec!["no contacts".to_string()]);
    }

    #[test]
    fn phone_lists_numbers() {
        let mut book = AddressBook::new();
        let mut ctx = Context {
            book: &mut book,
            order: ListOrder::ByName,
        };
        add(&mut ctx, "John", "0552-237-519");
        let reply = dispatch(
            &mut ctx,
            Command::Phone {
                name: "john".to_string(),
            },
        )
        .unwrap();
        assert_eq!(lines(reply), vec!["John: +380552237519".to_string()]);
    }

    #[test]
    fn search_without_match_is_no_match() {
        let mut book = AddressBook::new();
        let mut ctx = Context {
            book: &mut book,
            order: ListOrder::ByName,
        };
        add(&mut ctx, "John", "0552-237-519");
        let err = dispatch(
            &mut ctx,
            Command::Search {
                pattern: "zed".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::NoMatch);
    }

    #[test]
    fn exit_says_farewell() {
        let mut book = AddressBook::new();
        let mut ctx = Context {
            book: &mut book,
            order: ListOrder::ByName,
        };
        assert_eq!(dispatch(&mut ctx, Command::Exit).unwrap(), Reply::Farewell);
    }
}
