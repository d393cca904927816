//! # Error Taxonomy
//!
//! Errors are layered the same way the code is:
//!
//! - [`ValidationError`]: a value object rejected its raw input.
//! - [`TagListError`]: a tag set operation broke the set's invariants.
//! - [`ParseError`]: the command line was malformed (carries the usage string).
//! - [`ModelError`]: the model refused a mutation. Never shown to the user as is;
//!   commands translate it into a [`CommandError`] with their own wording.
//! - [`CommandError`]: a command precondition failed against the current model.
//! - [`RoloError`]: everything the API facade can return, including I/O and config.
//!
//! None of these is fatal. The front end prints the message and keeps reading commands.

use thiserror::Error;

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format!";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_INVALID_GROUP_DISPLAYED_INDEX: &str = "The group index provided is invalid";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Person names should only contain alphanumeric characters and spaces, and it should not be blank")]
    Name,

    #[error("Phone numbers can only contain numbers, and should be at least 3 digits long")]
    Phone,

    #[error("Person emails should be 2 parts separated by '@'")]
    Email,

    #[error("Person addresses can take any values, and it should not be blank")]
    Address,

    #[error("Birthdays should be in the format DD/MM/YYYY and be a valid date")]
    Birthday,

    #[error("Tags names should be alphanumeric")]
    Tag,

    #[error("Tag name '{0}' is reserved")]
    ReservedTag(String),

    #[error("Group names should only contain alphanumeric characters and spaces, and it should not be blank")]
    GroupName,

    #[error("Index is not a non-zero unsigned integer.")]
    Index,

    #[error("Invalid sorting type. Sort by one of: name, phone, email")]
    SortKey,

    #[error("Export destination cannot be empty")]
    FilePath,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagListError {
    #[error("Operation would result in duplicate tag: {0}")]
    Duplicate(String),

    #[error("Tag list already carries the pinned marker")]
    AlreadyPinned,

    #[error("Tag list does not carry the pinned marker")]
    NotPinned,

    #[error("Tag list does not contain the tag: {0}")]
    NotFound(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{}\n{usage}", MESSAGE_INVALID_COMMAND_FORMAT)]
    InvalidFormat { usage: &'static str },

    #[error("{}", MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand,

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,

    #[error(transparent)]
    Value(#[from] ValidationError),
}

impl ParseError {
    pub fn format(usage: &'static str) -> Self {
        ParseError::InvalidFormat { usage }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Operation would result in duplicate persons")]
    DuplicatePerson,

    #[error("Person not found")]
    PersonNotFound,

    #[error("Operation would result in duplicate groups")]
    DuplicateGroup,

    #[error("Group not found")]
    GroupNotFound,

    #[error("Person list no longer matches the recorded order")]
    OrderMismatch,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{}", MESSAGE_INVALID_PERSON_DISPLAYED_INDEX)]
    InvalidPersonIndex,

    #[error("{}", MESSAGE_INVALID_GROUP_DISPLAYED_INDEX)]
    InvalidGroupIndex,

    #[error("This person already exists in the address book")]
    DuplicatePerson,

    #[error("This group already exists in the address book")]
    DuplicateGroup,

    #[error("No more commands to undo!")]
    NothingToUndo,

    #[error("No more commands to redo!")]
    NothingToRedo,

    /// A generic failure, worded by the command that hit it.
    #[error("{0}")]
    Failed(String),
}

impl CommandError {
    pub fn failed(message: impl Into<String>) -> Self {
        CommandError::Failed(message.into())
    }
}

#[derive(Error, Debug)]
pub enum RoloError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, RoloError>;
