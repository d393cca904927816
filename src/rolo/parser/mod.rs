//! # Command Parsing
//!
//! Turns one line of user input into a [`Command`]. The first whitespace-delimited word
//! selects the verb; the rest is handed to that verb's parser.
//!
//! Parsers report two kinds of failure:
//!
//! - the shape is wrong (missing prefix, stray preamble, unparseable index) →
//!   [`ParseError::InvalidFormat`] carrying the verb's usage;
//! - the shape is right but a value breaks its constraint → [`ParseError::Value`] carrying
//!   the value object's own message.
//!
//! Parsing never looks at the model. Whether an index is in range is decided at execution.

pub mod tokenizer;
pub mod util;

use crate::commands::{
    self, add, clear, delete, edit, export, find, group, list, pinning, sort, tag, AddCommand,
    ClearCommand, Command, CreateGroupCommand, DeleteCommand, DeleteGroupCommand,
    DeleteTagCommand, EditCommand, EditPersonDescriptor, ExportCommand, FindCommand, PinCommand,
    SortCommand, UndoableCommand, UnpinCommand,
};
use crate::error::ParseError;
use crate::index::Index;
use crate::model::{Person, UniqueTagList};
use tokenizer::{
    tokenize, ArgumentMultimap, PREFIX_ADDRESS, PREFIX_BIRTHDAY, PREFIX_EMAIL, PREFIX_INDEX,
    PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
};

type ParseResult<T> = Result<T, ParseError>;

pub fn parse_command(input: &str) -> ParseResult<Command> {
    let input = input.trim();
    let (word, args) = match input.find(char::is_whitespace) {
        Some(at) => (&input[..at], &input[at..]),
        None => (input, ""),
    };
    if word.is_empty() {
        return Err(ParseError::format(commands::HELP_USAGE));
    }

    let command = match word {
        add::COMMAND_WORD => UndoableCommand::Add(parse_add(args)?).into(),
        edit::COMMAND_WORD => UndoableCommand::Edit(parse_edit(args)?).into(),
        delete::COMMAND_WORD => UndoableCommand::Delete(parse_delete(args)?).into(),
        clear::COMMAND_WORD => UndoableCommand::Clear(ClearCommand::new()).into(),
        pinning::PIN_WORD => {
            UndoableCommand::Pin(PinCommand::new(single_index(args, pinning::PIN_USAGE)?)).into()
        }
        pinning::UNPIN_WORD => UndoableCommand::Unpin(UnpinCommand::new(single_index(
            args,
            pinning::UNPIN_USAGE,
        )?))
        .into(),
        group::CREATE_WORD => UndoableCommand::CreateGroup(parse_create_group(args)?).into(),
        group::DELETE_WORD => UndoableCommand::DeleteGroup(DeleteGroupCommand::new(
            single_index(args, group::DELETE_USAGE)?,
        ))
        .into(),
        sort::COMMAND_WORD => UndoableCommand::Sort(parse_sort(args)?).into(),
        tag::COMMAND_WORD => UndoableCommand::DeleteTag(parse_delete_tag(args)?).into(),
        list::COMMAND_WORD => Command::List,
        find::COMMAND_WORD => Command::Find(parse_find(args)?),
        export::COMMAND_WORD => Command::Export(parse_export(args)?),
        commands::HISTORY_WORD => Command::History,
        commands::UNDO_WORD => Command::Undo,
        commands::REDO_WORD => Command::Redo,
        commands::HELP_WORD => Command::Help,
        commands::EXIT_WORD => Command::Exit,
        _ => return Err(ParseError::UnknownCommand),
    };
    Ok(command)
}

fn parse_add(args: &str) -> ParseResult<AddCommand> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_BIRTHDAY,
            PREFIX_TAG,
        ],
    );
    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
    if !map.contains_all(&required) || !map.preamble().is_empty() {
        return Err(ParseError::format(add::USAGE));
    }

    // `contains_all` guarantees each of these is `Some`.
    let missing = || ParseError::format(add::USAGE);
    let name = util::parse_name(map.value(PREFIX_NAME))?.ok_or_else(missing)?;
    let phone = util::parse_phone(map.value(PREFIX_PHONE))?.ok_or_else(missing)?;
    let email = util::parse_email(map.value(PREFIX_EMAIL))?.ok_or_else(missing)?;
    let address = util::parse_address(map.value(PREFIX_ADDRESS))?.ok_or_else(missing)?;
    let birthday = util::parse_birthday(map.value(PREFIX_BIRTHDAY))?;
    let tags = util::parse_tags(map.all_values(PREFIX_TAG))?;

    Ok(AddCommand::new(Person::new(
        name,
        phone,
        email,
        address,
        birthday,
        UniqueTagList::from_tags(tags),
    )))
}

fn parse_edit(args: &str) -> ParseResult<EditCommand> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_BIRTHDAY,
            PREFIX_TAG,
        ],
    );
    let index = util::parse_index(map.preamble()).map_err(|_| ParseError::format(edit::USAGE))?;

    let descriptor = EditPersonDescriptor {
        name: util::parse_name(map.value(PREFIX_NAME))?,
        phone: util::parse_phone(map.value(PREFIX_PHONE))?,
        email: util::parse_email(map.value(PREFIX_EMAIL))?,
        address: util::parse_address(map.value(PREFIX_ADDRESS))?,
        birthday: util::parse_birthday(map.value(PREFIX_BIRTHDAY))?,
        tags: edited_tags(&map)?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NothingToEdit);
    }
    Ok(EditCommand::new(index, descriptor))
}

/// `None` when no `t/` was given; a lone empty `t/` clears the user tags.
fn edited_tags(map: &ArgumentMultimap) -> ParseResult<Option<Vec<crate::model::Tag>>> {
    let values = map.all_values(PREFIX_TAG);
    if values.is_empty() {
        return Ok(None);
    }
    if values.len() == 1 && values[0].is_empty() {
        return Ok(Some(Vec::new()));
    }
    Ok(Some(util::parse_tags(values)?))
}

fn parse_delete(args: &str) -> ParseResult<DeleteCommand> {
    let indexes =
        util::parse_comma_indexes(args).map_err(|_| ParseError::format(delete::USAGE))?;
    Ok(DeleteCommand::new(indexes))
}

fn single_index(args: &str, usage: &'static str) -> ParseResult<Index> {
    util::parse_index(args).map_err(|_| ParseError::format(usage))
}

fn parse_create_group(args: &str) -> ParseResult<CreateGroupCommand> {
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_INDEX]);
    if !map.contains_all(&[PREFIX_NAME, PREFIX_INDEX]) || !map.preamble().is_empty() {
        return Err(ParseError::format(group::CREATE_USAGE));
    }
    let name = util::parse_group_name(map.value(PREFIX_NAME))?
        .ok_or_else(|| ParseError::format(group::CREATE_USAGE))?;
    let indexes = util::parse_indexes(map.value(PREFIX_INDEX).unwrap_or_default())?;
    Ok(CreateGroupCommand::new(name, indexes))
}

fn parse_sort(args: &str) -> ParseResult<SortCommand> {
    if args.trim().is_empty() {
        return Err(ParseError::format(sort::USAGE));
    }
    Ok(SortCommand::new(util::parse_sort_key(args)?))
}

fn parse_delete_tag(args: &str) -> ParseResult<DeleteTagCommand> {
    if args.trim().is_empty() {
        return Err(ParseError::format(tag::USAGE));
    }
    Ok(DeleteTagCommand::new(util::parse_tag(args)?))
}

fn parse_find(args: &str) -> ParseResult<FindCommand> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::format(find::USAGE));
    }
    Ok(FindCommand::new(keywords))
}

fn parse_export(args: &str) -> ParseResult<ExportCommand> {
    let path = util::parse_file_path(args).map_err(|_| ParseError::format(export::USAGE))?;
    Ok(ExportCommand::new(path))
}
