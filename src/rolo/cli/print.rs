use colored::Colorize;
use rolo::api::{CmdMessage, MessageLevel};
use rolo::error::RoloError;
use rolo::events::ModelEvent;
use rolo::model::{Group, Person};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const PIN_MARKER: &str = "⚲";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(err: &RoloError) {
    eprintln!("{} {}", "Error:".red(), err);
}

pub(super) fn print_event(event: &ModelEvent) {
    print_persons(event.displayed());
    if let ModelEvent::AddressBookChanged { groups, .. } = event {
        print_groups(groups);
    }
}

pub(super) fn print_persons(persons: &[Person]) {
    if persons.is_empty() {
        println!("No persons to show.");
        return;
    }
    for (i, person) in persons.iter().enumerate() {
        let line = person_line(i + 1, person, LINE_WIDTH);
        if person.is_pinned() {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }
}

fn print_groups(groups: &[Group]) {
    if groups.is_empty() {
        return;
    }
    println!("{}", "Groups:".bold());
    for (i, group) in groups.iter().enumerate() {
        println!("  {}. {}", i + 1, group);
    }
}

/// One row of the person list, at most `width` columns wide.
fn person_line(position: usize, person: &Person, width: usize) -> String {
    let prefix = if person.is_pinned() {
        format!("{} {}. ", PIN_MARKER, position)
    } else {
        format!("  {}. ", position)
    };

    let mut details = format!(
        "{}  {}  {}",
        person.name(),
        person.phone(),
        person.email()
    );
    let tags: Vec<&str> = person.tags().user_tags().map(|t| t.name()).collect();
    if !tags.is_empty() {
        details.push_str(&format!("  [{}]", tags.join(", ")));
    }

    let available = width.saturating_sub(prefix.width());
    format!("{}{}", prefix, truncate_to_width(&details, available))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolo::model::{Address, Email, Name, Phone, Tag, UniqueTagList};

    fn alice(tags: &[&str], pinned: bool) -> Person {
        let mut list = UniqueTagList::from_tags(tags.iter().map(|t| Tag::new(t).unwrap()));
        if pinned {
            list.add_pin_tag().unwrap();
        }
        Person::new(
            Name::new("Alice Tan").unwrap(),
            Phone::new("98765432").unwrap(),
            Email::new("alice@example.com").unwrap(),
            Address::new("1 Main St").unwrap(),
            None,
            list,
        )
    }

    #[test]
    fn plain_row() {
        assert_eq!(
            person_line(3, &alice(&["friend"], false), LINE_WIDTH),
            "  3. Alice Tan  98765432  alice@example.com  [friend]"
        );
    }

    #[test]
    fn pinned_row_has_marker_and_hides_reserved_tag() {
        let line = person_line(1, &alice(&[], true), LINE_WIDTH);
        assert_eq!(line, "⚲ 1. Alice Tan  98765432  alice@example.com");
    }

    #[test]
    fn long_rows_are_truncated() {
        let line = person_line(1, &alice(&[], false), 20);
        assert_eq!(line.width(), 20);
        assert!(line.ends_with('…'));
    }

    #[test]
    fn truncation_counts_wide_chars() {
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
        assert_eq!(truncate_to_width("short", 10), "short");
    }
}
