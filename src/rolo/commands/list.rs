use super::CmdResult;
use crate::model::{Model, PersonFilter};

pub const COMMAND_WORD: &str = "list";

pub const USAGE: &str = "list: Lists all persons in the address book.\n\
Example: list";

pub fn run(model: &mut Model) -> CmdResult {
    model.update_filter(PersonFilter::All);
    CmdResult::success("Listed all persons")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::model_with;

    #[test]
    fn list_resets_filter() {
        let mut model = model_with(&["Alice Tan", "Bob Lee"]);
        model.update_filter(PersonFilter::Keywords(vec!["bob".into()]));
        assert_eq!(model.filtered_person_list().len(), 1);

        let result = run(&mut model);
        assert_eq!(result.feedback(), "Listed all persons");
        assert_eq!(model.filter(), &PersonFilter::All);
        assert_eq!(model.filtered_person_list().len(), 2);
    }
}
