use super::control::{ControlTag, FieldControl};
use super::snapshot::EntrySnapshot;
use std::fmt;

/// One way of locating a form control
///
/// Mirrors the subset of CSS selectors the resume pages rely on; `Display`
/// renders the equivalent CSS so lookups can be logged and queried verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector {
    /// `#id`, any control kind
    Id(&'static str),
    /// `tag[name="..."]`
    Name(ControlTag, &'static str),
    /// `tag[placeholder="..."]`
    Placeholder(ControlTag, &'static str),
    /// `input[type="..."]`
    InputType(&'static str),
    /// `tag`, the first control of that kind
    Tag(ControlTag),
}

impl Selector {
    pub fn matches(&self, control: &FieldControl) -> bool {
        match self {
            Selector::Id(id) => control.id.as_deref() == Some(*id),
            Selector::Name(tag, name) => control.tag == *tag && control.name.as_deref() == Some(*name),
            Selector::Placeholder(tag, text) => {
                control.tag == *tag && control.placeholder.as_deref() == Some(*text)
            }
            Selector::InputType(ty) => {
                control.tag == ControlTag::Input
                    && control
                        .input_type
                        .as_deref()
                        .is_some_and(|t| t.eq_ignore_ascii_case(ty))
            }
            Selector::Tag(tag) => control.tag == *tag,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "#{}", id),
            Selector::Name(tag, name) => write!(f, "{}[name=\"{}\"]", tag.as_str(), name),
            Selector::Placeholder(tag, text) => {
                write!(f, "{}[placeholder=\"{}\"]", tag.as_str(), text)
            }
            Selector::InputType(ty) => write!(f, "input[type=\"{}\"]", ty),
            Selector::Tag(tag) => f.write_str(tag.as_str()),
        }
    }
}

/// One way of recognising the entries inside a list container
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryStrategy {
    /// `[data-section="..."]`
    DataSection(&'static str),
    /// `.class`
    Class(&'static str),
    /// any `div` child
    AnyDiv,
}

impl EntryStrategy {
    pub fn matches(&self, entry: &EntrySnapshot) -> bool {
        match self {
            EntryStrategy::DataSection(section) => entry.data_section.as_deref() == Some(*section),
            EntryStrategy::Class(class) => entry.has_class(class),
            EntryStrategy::AnyDiv => entry.tag.eq_ignore_ascii_case("div"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_matches_any_control_kind() {
        let control = FieldControl::textarea().with_id("summary");
        assert!(Selector::Id("summary").matches(&control));
        assert!(!Selector::Id("title").matches(&control));
    }

    #[test]
    fn test_name_and_placeholder_respect_tag() {
        let control = FieldControl::input().with_name("summary").with_placeholder("Professional Summary");
        assert!(Selector::Name(ControlTag::Input, "summary").matches(&control));
        assert!(!Selector::Name(ControlTag::Textarea, "summary").matches(&control));
        assert!(!Selector::Placeholder(ControlTag::Textarea, "Professional Summary").matches(&control));
    }

    #[test]
    fn test_input_type_only_matches_inputs() {
        let email = FieldControl::input().with_type("EMAIL");
        assert!(Selector::InputType("email").matches(&email));
        let untyped = FieldControl::input();
        assert!(!Selector::InputType("email").matches(&untyped));
    }

    #[test]
    fn test_display_renders_css() {
        assert_eq!(Selector::Id("email").to_string(), "#email");
        assert_eq!(
            Selector::Placeholder(ControlTag::Textarea, "Description").to_string(),
            "textarea[placeholder=\"Description\"]"
        );
        assert_eq!(Selector::InputType("tel").to_string(), "input[type=\"tel\"]");
        assert_eq!(Selector::Tag(ControlTag::Select).to_string(), "select");
    }
}
