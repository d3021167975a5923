use super::control::ControlTag;
use super::control::ControlTag::{Input, Select, Textarea};
use crate::types::{EntryField, EntryKind, PersonalField};

/// Markup of one personal-info control
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PersonalFieldSpec {
    pub field: PersonalField,
    pub label: &'static str,
    pub tag: ControlTag,
    pub id: &'static str,
    pub name: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
}

/// Markup of one control inside an entry sub-form
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntryFieldSpec {
    pub field: EntryField,
    pub tag: ControlTag,
    pub placeholder: &'static str,
    pub input_type: &'static str,
}

/// Text box next to the Add button whose value seeds the new entry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuickAdd {
    pub input_id: &'static str,
    pub placeholder: &'static str,
    pub field: EntryField,
    /// Alerted when Add is pressed with a blank box
    pub empty_message: &'static str,
}

impl QuickAdd {
    /// The trimmed value to seed, or the message to show instead
    pub fn validate(&self, value: &str) -> Result<String, &'static str> {
        match value.trim() {
            "" => Err(self.empty_message),
            value => Ok(value.to_string()),
        }
    }
}

/// Markup of one dynamic list
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionLayout {
    pub kind: EntryKind,
    pub container_id: &'static str,
    pub add_label: &'static str,
    /// Whether entries also carry the `<kind>-entry` class
    pub classed_entries: bool,
    pub fields: &'static [EntryFieldSpec],
    /// Entries are added from a text box instead of blank
    pub quick_add: Option<QuickAdd>,
}

/// Markup of a whole resume editor page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormLayout {
    pub name: &'static str,
    pub personal: &'static [PersonalFieldSpec],
    pub sections: &'static [SectionLayout],
}

impl FormLayout {
    /// The list layout for an entry kind, if this page has one
    pub fn section(&self, kind: EntryKind) -> Option<&'static SectionLayout> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Ids that must exist on the page before a save can proceed
    pub fn required_ids(&self) -> Vec<&'static str> {
        self.personal
            .iter()
            .filter(|spec| {
                matches!(
                    spec.field,
                    PersonalField::FullName | PersonalField::FirstName | PersonalField::Title | PersonalField::Summary
                )
            })
            .map(|spec| spec.id)
            .chain(self.sections.iter().map(|s| s.container_id))
            .collect()
    }

    pub fn has_personal(&self, field: PersonalField) -> bool {
        self.personal.iter().any(|spec| spec.field == field)
    }

    pub fn container_ids(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.container_id).collect()
    }
}

/// Named resume templates served by the backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ResumeTemplate {
    #[default]
    Professional,
    Creative,
    Modern,
    Technical,
}

impl ResumeTemplate {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "professional" => Some(ResumeTemplate::Professional),
            "creative" => Some(ResumeTemplate::Creative),
            "modern" => Some(ResumeTemplate::Modern),
            "technical" => Some(ResumeTemplate::Technical),
            _ => None,
        }
    }

    pub fn layout(&self) -> &'static FormLayout {
        match self {
            ResumeTemplate::Technical => &TECHNICAL_LAYOUT,
            ResumeTemplate::Professional | ResumeTemplate::Creative | ResumeTemplate::Modern => {
                &PROFESSIONAL_LAYOUT
            }
        }
    }
}

const fn personal(
    field: PersonalField,
    label: &'static str,
    tag: ControlTag,
    id: &'static str,
    name: &'static str,
    placeholder: &'static str,
    input_type: &'static str,
) -> PersonalFieldSpec {
    PersonalFieldSpec {
        field,
        label,
        tag,
        id,
        name,
        placeholder,
        input_type,
    }
}

const fn entry(field: EntryField, tag: ControlTag, placeholder: &'static str, input_type: &'static str) -> EntryFieldSpec {
    EntryFieldSpec {
        field,
        tag,
        placeholder,
        input_type,
    }
}

pub static PROFESSIONAL_LAYOUT: FormLayout = FormLayout {
    name: "professional",
    personal: &[
        personal(PersonalField::FullName, "Full Name", Input, "fullName", "fullName", "Full Name", "text"),
        personal(PersonalField::Title, "Professional Title", Input, "title", "professionalTitle", "Professional Title", "text"),
        personal(PersonalField::Email, "Email", Input, "email", "email", "Email Address", "email"),
        personal(PersonalField::Phone, "Phone", Input, "phone", "phone", "Phone Number", "tel"),
        personal(PersonalField::Location, "Location", Input, "location", "location", "City, Country", "text"),
        personal(PersonalField::Summary, "Summary", Textarea, "summary", "summary", "Professional Summary", ""),
    ],
    sections: &[
        SectionLayout {
            kind: EntryKind::Experience,
            container_id: "experienceList",
            add_label: "Add Experience",
            classed_entries: false,
            fields: &[
                entry(EntryField::Company, Input, "Company Name", "text"),
                entry(EntryField::Position, Input, "Position", "text"),
                entry(EntryField::StartDate, Input, "Start Date", "month"),
                entry(EntryField::EndDate, Input, "End Date", "month"),
                entry(EntryField::Description, Textarea, "Description", ""),
            ],
            quick_add: None,
        },
        SectionLayout {
            kind: EntryKind::Education,
            container_id: "educationList",
            add_label: "Add Education",
            classed_entries: false,
            fields: &[
                entry(EntryField::Institution, Input, "Institution", "text"),
                entry(EntryField::Degree, Input, "Degree", "text"),
                entry(EntryField::StartDate, Input, "Start Date", "month"),
                entry(EntryField::EndDate, Input, "End Date", "month"),
                entry(EntryField::Gpa, Input, "GPA", "text"),
            ],
            quick_add: None,
        },
        SectionLayout {
            kind: EntryKind::Skill,
            container_id: "skillsList",
            add_label: "Add Skill",
            classed_entries: false,
            fields: &[
                entry(EntryField::SkillName, Input, "Skill Name", "text"),
                entry(EntryField::SkillLevel, Select, "", ""),
            ],
            quick_add: None,
        },
    ],
};

pub static TECHNICAL_LAYOUT: FormLayout = FormLayout {
    name: "technical",
    personal: &[
        personal(PersonalField::FirstName, "First Name", Input, "firstName", "firstName", "First Name", "text"),
        personal(PersonalField::LastName, "Last Name", Input, "lastName", "lastName", "Last Name", "text"),
        personal(PersonalField::Title, "Professional Title", Input, "professionalTitle", "professionalTitle", "Professional Title", "text"),
        personal(PersonalField::Email, "Email", Input, "email", "email", "Email Address", "email"),
        personal(PersonalField::Phone, "Phone", Input, "phone", "phone", "Phone Number", "tel"),
        personal(PersonalField::Location, "Address", Input, "address", "location", "City, Country", "text"),
        personal(PersonalField::Github, "GitHub", Input, "githubProfile", "github", "GitHub Profile", "url"),
        personal(PersonalField::Linkedin, "LinkedIn", Input, "linkedinProfile", "linkedin", "LinkedIn Profile", "url"),
        personal(PersonalField::Summary, "Summary", Textarea, "summary", "summary", "Professional Summary", ""),
    ],
    sections: &[
        SectionLayout {
            kind: EntryKind::Experience,
            container_id: "experienceContainer",
            add_label: "Add Experience",
            classed_entries: true,
            fields: &[
                entry(EntryField::Position, Input, "Job Title", "text"),
                entry(EntryField::Company, Input, "Company", "text"),
                entry(EntryField::StartDate, Input, "Start Date", "text"),
                entry(EntryField::EndDate, Input, "End Date", "text"),
                entry(EntryField::Description, Textarea, "Job Description", ""),
            ],
            quick_add: None,
        },
        SectionLayout {
            kind: EntryKind::Education,
            container_id: "educationContainer",
            add_label: "Add Education",
            classed_entries: true,
            fields: &[
                entry(EntryField::Degree, Input, "Degree", "text"),
                entry(EntryField::Institution, Input, "Institution", "text"),
                entry(EntryField::StartDate, Input, "Graduation Year", "text"),
                entry(EntryField::Gpa, Input, "GPA", "text"),
            ],
            quick_add: None,
        },
        SectionLayout {
            kind: EntryKind::Skill,
            container_id: "skillsContainer",
            add_label: "Add Skill",
            classed_entries: true,
            fields: &[entry(EntryField::SkillName, Input, "Skill Name", "text")],
            quick_add: Some(QuickAdd {
                input_id: "newSkill",
                placeholder: "Add a skill",
                field: EntryField::SkillName,
                empty_message: "Please enter a skill",
            }),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parse() {
        assert_eq!(ResumeTemplate::parse("Technical"), Some(ResumeTemplate::Technical));
        assert_eq!(ResumeTemplate::parse("resume"), None);
    }

    #[test]
    fn test_creative_and_modern_share_professional_markup() {
        assert_eq!(ResumeTemplate::Creative.layout().name, "professional");
        assert_eq!(ResumeTemplate::Modern.layout().name, "professional");
        assert_eq!(ResumeTemplate::Technical.layout().name, "technical");
    }

    #[test]
    fn test_required_ids() {
        assert_eq!(
            PROFESSIONAL_LAYOUT.required_ids(),
            vec!["fullName", "title", "summary", "experienceList", "educationList", "skillsList"]
        );
        assert_eq!(
            TECHNICAL_LAYOUT.required_ids(),
            vec![
                "firstName",
                "professionalTitle",
                "summary",
                "experienceContainer",
                "educationContainer",
                "skillsContainer"
            ]
        );
    }

    #[test]
    fn test_every_section_container_is_known() {
        for layout in [&PROFESSIONAL_LAYOUT, &TECHNICAL_LAYOUT] {
            for id in layout.container_ids() {
                assert!(crate::form::ENTRY_CONTAINER_IDS.contains(&id), "{} not scanned", id);
            }
        }
    }

    #[test]
    fn test_technical_skills_add_from_text_box() {
        let quick = TECHNICAL_LAYOUT.section(EntryKind::Skill).and_then(|s| s.quick_add).unwrap();
        assert_eq!(quick.input_id, "newSkill");
        assert_eq!(quick.validate("  Rust "), Ok("Rust".to_string()));
        assert_eq!(quick.validate("   "), Err("Please enter a skill"));
        assert!(PROFESSIONAL_LAYOUT.sections.iter().all(|s| s.quick_add.is_none()));
    }

    #[test]
    fn test_every_kind_has_a_section() {
        for layout in [&PROFESSIONAL_LAYOUT, &TECHNICAL_LAYOUT] {
            for kind in [EntryKind::Experience, EntryKind::Education, EntryKind::Skill] {
                assert!(layout.section(kind).is_some());
            }
        }
    }
}
