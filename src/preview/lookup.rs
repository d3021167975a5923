use crate::form::ControlTag::{Input, Textarea};
use crate::form::{EntrySnapshot, EntryStrategy, FormSnapshot, Selector};

/// Ordered fallback chain for one displayed field
///
/// Selectors are tried in priority order; the first control found with a
/// non-blank value wins. When none does, `default` is shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldLookup {
    pub selectors: &'static [Selector],
    pub default: &'static str,
}

impl FieldLookup {
    /// First non-blank value anywhere on the page
    pub fn find<'a>(&self, snapshot: &'a FormSnapshot) -> Option<&'a str> {
        let found = self
            .selectors
            .iter()
            .find_map(|selector| snapshot.find(selector).and_then(|c| c.trimmed_value()));
        if found.is_none() {
            log::trace!("No value for {}", self.describe());
        }
        found
    }

    /// First non-blank value inside one entry
    pub fn find_in<'a>(&self, entry: &'a EntrySnapshot) -> Option<&'a str> {
        self.selectors
            .iter()
            .find_map(|selector| entry.find(selector).and_then(|c| c.trimmed_value()))
    }

    pub fn resolve<'a>(&self, snapshot: &'a FormSnapshot) -> &'a str
    where
        'static: 'a,
    {
        self.find(snapshot).unwrap_or(self.default)
    }

    pub fn resolve_in<'a>(&self, entry: &'a EntrySnapshot) -> &'a str
    where
        'static: 'a,
    {
        self.find_in(entry).unwrap_or(self.default)
    }

    /// Selector chain as a CSS selector list, for logging
    pub fn describe(&self) -> String {
        self.selectors
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Where a section's entries live and how they are recognised
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionLookup {
    pub containers: &'static [&'static str],
    pub strategies: &'static [EntryStrategy],
}

impl SectionLookup {
    pub fn entries<'a>(&self, snapshot: &'a FormSnapshot) -> Vec<&'a EntrySnapshot> {
        snapshot.entries(self.containers, self.strategies)
    }
}

// Personal info

pub const FIRST_NAME: FieldLookup = FieldLookup {
    selectors: &[
        Selector::Id("firstName"),
        Selector::Name(Input, "firstName"),
        Selector::Placeholder(Input, "First Name"),
    ],
    default: "First",
};

pub const LAST_NAME: FieldLookup = FieldLookup {
    selectors: &[
        Selector::Id("lastName"),
        Selector::Name(Input, "lastName"),
        Selector::Placeholder(Input, "Last Name"),
    ],
    default: "Last",
};

pub const FULL_NAME: FieldLookup = FieldLookup {
    selectors: &[
        Selector::Id("name"),
        Selector::Name(Input, "fullName"),
        Selector::Placeholder(Input, "Full Name"),
    ],
    default: "Your Name",
};

pub const EMAIL: FieldLookup = FieldLookup {
    selectors: &[
        Selector::Id("email"),
        Selector::Name(Input, "email"),
        Selector::Placeholder(Input, "Email Address"),
        Selector::InputType("email"),
    ],
    default: "email@example.com",
};

pub const PHONE: FieldLookup = FieldLookup {
    selectors: &[
        Selector::Id("phone"),
        Selector::Name(Input, "phone"),
        Selector::Placeholder(Input, "Phone Number"),
        Selector::InputType("tel"),
    ],
    default: "Phone",
};

pub const LOCATION: FieldLookup = FieldLookup {
    selectors: &[
        Selector::Id("address"),
        Selector::Id("location"),
        Selector::Name(Input, "location"),
        Selector::Placeholder(Input, "City, Country"),
    ],
    default: "Location",
};

pub const SUMMARY: FieldLookup = FieldLookup {
    selectors: &[
        Selector::Id("summary"),
        Selector::Name(Textarea, "summary"),
        Selector::Placeholder(Textarea, "Professional Summary"),
    ],
    default: "Professional Summary",
};

pub const PROFESSIONAL_TITLE: FieldLookup = FieldLookup {
    selectors: &[
        Selector::Id("professionalTitle"),
        Selector::Name(Input, "professionalTitle"),
        Selector::Placeholder(Input, "Professional Title"),
    ],
    default: "Professional Title",
};

// Sections

pub const EXPERIENCE_SECTION: SectionLookup = SectionLookup {
    containers: &["experienceList", "experienceContainer"],
    strategies: &[
        EntryStrategy::DataSection("experience"),
        EntryStrategy::Class("experience-entry"),
        EntryStrategy::AnyDiv,
    ],
};

pub const EDUCATION_SECTION: SectionLookup = SectionLookup {
    containers: &["educationList", "educationContainer"],
    strategies: &[
        EntryStrategy::DataSection("education"),
        EntryStrategy::Class("education-entry"),
        EntryStrategy::AnyDiv,
    ],
};

pub const SKILLS_SECTION: SectionLookup = SectionLookup {
    containers: &["skillsList", "skillsContainer"],
    strategies: &[
        EntryStrategy::DataSection("skill"),
        EntryStrategy::Class("skill-entry"),
        EntryStrategy::AnyDiv,
    ],
};

// Experience entries

pub const EXPERIENCE_COMPANY: FieldLookup = FieldLookup {
    selectors: &[
        Selector::Placeholder(Input, "Company Name"),
        Selector::Placeholder(Input, "Company"),
    ],
    default: "Company Name",
};

pub const EXPERIENCE_POSITION: FieldLookup = FieldLookup {
    selectors: &[
        Selector::Placeholder(Input, "Position"),
        Selector::Placeholder(Input, "Job Title"),
    ],
    default: "Position",
};

pub const EXPERIENCE_START: FieldLookup = FieldLookup {
    selectors: &[Selector::Placeholder(Input, "Start Date")],
    default: "Start Date",
};

pub const EXPERIENCE_END: FieldLookup = FieldLookup {
    selectors: &[Selector::Placeholder(Input, "End Date")],
    default: "End Date",
};

pub const EXPERIENCE_DESCRIPTION: FieldLookup = FieldLookup {
    selectors: &[
        Selector::Placeholder(Textarea, "Description"),
        Selector::Placeholder(Textarea, "Job Description"),
    ],
    default: "Description",
};

// Education entries

pub const EDUCATION_INSTITUTION: FieldLookup = FieldLookup {
    selectors: &[Selector::Placeholder(Input, "Institution")],
    default: "Institution",
};

pub const EDUCATION_DEGREE: FieldLookup = FieldLookup {
    selectors: &[Selector::Placeholder(Input, "Degree")],
    default: "Degree",
};

pub const EDUCATION_START: FieldLookup = FieldLookup {
    selectors: &[
        Selector::Placeholder(Input, "Start Date"),
        Selector::Placeholder(Input, "Graduation Year"),
    ],
    default: "Start Date",
};

pub const EDUCATION_END: FieldLookup = FieldLookup {
    selectors: &[Selector::Placeholder(Input, "End Date")],
    default: "End Date",
};

/// Shown only when filled in
pub const EDUCATION_GPA: FieldLookup = FieldLookup {
    selectors: &[Selector::Placeholder(Input, "GPA")],
    default: "",
};

// Skill entries

pub const SKILL_NAME: FieldLookup = FieldLookup {
    selectors: &[
        Selector::Placeholder(Input, "Skill Name"),
        Selector::Tag(Input),
    ],
    default: "Skill",
};

/// Shown only when a level is selected
pub const SKILL_LEVEL: FieldLookup = FieldLookup {
    selectors: &[Selector::Tag(crate::form::ControlTag::Select)],
    default: "",
};
