use super::CmdResult;
use crate::model::{Model, PersonFilter};

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find: Finds all persons whose names contain any of the specified keywords \
(case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn run(&self, model: &mut Model) -> CmdResult {
        model.update_filter(PersonFilter::Keywords(self.keywords.clone()));
        let count = model.filtered_person_list().len();
        CmdResult::success(format!(
            "{} person{} listed!",
            count,
            if count == 1 { "" } else { "s" }
        ))
    }
}
