use crate::form::ResumeTemplate;
use crate::lists::{EntryKey, EntryLists};
use crate::types::{EntryField, EntryKind, PersonalField, PersonalInfo, ResumeData};
use std::rc::Rc;
use yew::Reducible;

/// Everything the resume editor form holds
#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    pub template: ResumeTemplate,
    pub personal: PersonalInfo,
    pub lists: EntryLists,
    /// Bumped by every applied action
    pub revision: u64,
    /// First or last name edited since the last load
    name_edited: bool,
    /// First/last were split out of a loaded `name` and are not part of the record
    derived_halves: bool,
}

pub enum EditorAction {
    SetPersonal(PersonalField, String),
    Add(EntryKind),
    /// Add an entry with one field already filled in; blank values are rejected
    AddFilled(EntryKind, EntryField, String),
    Remove(EntryKind, EntryKey),
    SetEntryField(EntryKind, EntryKey, EntryField, String),
    Load(ResumeData),
}

impl EditorState {
    pub fn new(template: ResumeTemplate) -> Self {
        Self {
            template,
            personal: PersonalInfo::default(),
            lists: EntryLists::new(),
            revision: 0,
            name_edited: false,
            derived_halves: false,
        }
    }

    /// Whether this template edits the name as separate first and last fields
    fn splits_name(&self) -> bool {
        !self.template.layout().has_personal(PersonalField::FullName)
    }

    /// Apply one action; returns false when it was rejected
    pub fn apply(&mut self, action: EditorAction) -> bool {
        match action {
            EditorAction::SetPersonal(field, value) => {
                if matches!(field, PersonalField::FirstName | PersonalField::LastName) {
                    self.name_edited = true;
                }
                self.personal.set(field, value)
            }
            EditorAction::Add(kind) => {
                if self.template.layout().section(kind).is_none() {
                    log::warn!("No {} list on this page", kind.data_section());
                    return false;
                }
                self.lists.add_entry(kind);
            }
            EditorAction::AddFilled(kind, field, value) => {
                let value = value.trim();
                if value.is_empty() || self.template.layout().section(kind).is_none() {
                    log::warn!("Not adding {} entry with blank {:?}", kind.data_section(), field);
                    return false;
                }
                let key = self.lists.add_entry(kind);
                self.lists.set_field(kind, key, field, value.to_string());
            }
            EditorAction::Remove(kind, key) => {
                if !self.lists.remove_entry(kind, key) {
                    return false;
                }
            }
            EditorAction::SetEntryField(kind, key, field, value) => {
                self.lists.set_field(kind, key, field, value)
            }
            EditorAction::Load(data) => {
                self.personal = data.personal_info.clone();
                self.name_edited = false;
                self.derived_halves = self.splits_name()
                    && self.personal.first_name.trim().is_empty()
                    && self.personal.last_name.trim().is_empty();
                if self.derived_halves {
                    self.personal.split_name();
                }
                self.lists.load(&data);
                log::info!(
                    "Loaded resume: {} experience, {} education, {} skills",
                    data.experience.len(),
                    data.education.len(),
                    data.skills.len()
                );
            }
        }
        self.revision += 1;
        true
    }

    /// The document sent to `/api/save-resume`
    ///
    /// On split-name templates `name` is rebuilt from the halves once either was
    /// edited, even when both are now empty; an untouched loaded name is sent as is.
    pub fn to_resume_data(&self) -> ResumeData {
        let mut personal_info = self.personal.clone();
        if self.splits_name() {
            if self.name_edited {
                personal_info.name = personal_info.joined_name();
            }
            if self.derived_halves {
                personal_info.first_name.clear();
                personal_info.last_name.clear();
            }
        }

        ResumeData {
            personal_info,
            experience: self.lists.experience.to_vec(),
            education: self.lists.education.to_vec(),
            skills: self.lists.skills.to_vec(),
        }
    }
}

impl Reducible for EditorState {
    type Action = EditorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EducationEntry, ExperienceEntry, SkillEntry};

    fn sample() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                name: "Ada Lovelace".into(),
                title: "Analyst".into(),
                summary: "First programmer".into(),
                email: "ada@example.com".into(),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                company: "Analytical Engines".into(),
                position: "Programmer".into(),
                start_date: "1842-01".into(),
                end_date: "1843-09".into(),
                description: "Notes on the engine".into(),
            }],
            education: vec![EducationEntry {
                institution: "Home".into(),
                degree: "Mathematics".into(),
                ..Default::default()
            }],
            skills: vec![
                SkillEntry { name: "Mathematics".into(), level: "Expert".into() },
                SkillEntry { name: "Poetry".into(), level: "Intermediate".into() },
            ],
        }
    }

    #[test]
    fn test_load_then_save_round_trips() {
        let mut state = EditorState::new(ResumeTemplate::Professional);
        state.apply(EditorAction::Load(sample()));
        assert_eq!(state.to_resume_data(), sample());
    }

    #[test]
    fn test_add_remove_and_edit() {
        let mut state = EditorState::new(ResumeTemplate::Professional);
        for _ in 0..3 {
            state.apply(EditorAction::Add(EntryKind::Skill));
        }
        let keys: Vec<EntryKey> = state.lists.skills.iter().map(|(k, _)| k).collect();
        state.apply(EditorAction::SetEntryField(EntryKind::Skill, keys[2], EntryField::SkillName, "Rust".into()));
        state.apply(EditorAction::Remove(EntryKind::Skill, keys[0]));

        let skills = state.to_resume_data().skills;
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[1].name, "Rust");
    }

    #[test]
    fn test_add_filled_seeds_entry_and_rejects_blank() {
        let state = Rc::new(EditorState::new(ResumeTemplate::Technical));
        let next = state.clone().reduce(EditorAction::AddFilled(EntryKind::Skill, EntryField::SkillName, "  ".into()));
        assert!(Rc::ptr_eq(&state, &next));

        let next = next.reduce(EditorAction::AddFilled(EntryKind::Skill, EntryField::SkillName, " Rust ".into()));
        let skills = next.to_resume_data().skills;
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "Rust");
    }

    #[test]
    fn test_rejected_action_keeps_revision() {
        let state = Rc::new(EditorState::new(ResumeTemplate::Professional));
        let next = state.clone().reduce(EditorAction::Remove(EntryKind::Education, 99));
        assert!(Rc::ptr_eq(&state, &next));

        let next = next.reduce(EditorAction::Add(EntryKind::Education));
        assert_eq!(next.revision, 1);
    }

    #[test]
    fn test_technical_template_joins_split_name() {
        let mut state = EditorState::new(ResumeTemplate::Technical);
        state.apply(EditorAction::SetPersonal(PersonalField::FirstName, "Grace".into()));
        state.apply(EditorAction::SetPersonal(PersonalField::LastName, "Hopper".into()));
        assert_eq!(state.to_resume_data().personal_info.name, "Grace Hopper");
    }

    #[test]
    fn test_technical_template_splits_loaded_name() {
        let mut state = EditorState::new(ResumeTemplate::Technical);
        state.apply(EditorAction::Load(sample()));
        assert_eq!(state.personal.first_name, "Ada");
        assert_eq!(state.personal.last_name, "Lovelace");

        state.apply(EditorAction::SetPersonal(PersonalField::LastName, "King".into()));
        let saved = state.to_resume_data().personal_info;
        assert_eq!(saved.name, "Ada King");
        assert!(saved.first_name.is_empty());
    }

    #[test]
    fn test_technical_template_round_trips_loaded_name() {
        let mut data = sample();
        data.personal_info.name = "Ada  Lovelace".into();
        let mut state = EditorState::new(ResumeTemplate::Technical);
        state.apply(EditorAction::Load(data.clone()));

        let saved = state.to_resume_data();
        assert_eq!(saved, data);
        assert_eq!(
            serde_json::to_value(&saved).unwrap(),
            serde_json::to_value(&data).unwrap()
        );
    }

    #[test]
    fn test_technical_template_keeps_halves_from_record() {
        let mut data = sample();
        data.personal_info.first_name = "Augusta".into();
        data.personal_info.last_name = "King".into();
        let mut state = EditorState::new(ResumeTemplate::Technical);
        state.apply(EditorAction::Load(data.clone()));
        assert_eq!(state.to_resume_data(), data);
    }

    #[test]
    fn test_clearing_split_name_clears_saved_name() {
        let mut state = EditorState::new(ResumeTemplate::Technical);
        state.apply(EditorAction::Load(sample()));
        state.apply(EditorAction::SetPersonal(PersonalField::FirstName, String::new()));
        state.apply(EditorAction::SetPersonal(PersonalField::LastName, String::new()));
        assert_eq!(state.to_resume_data().personal_info.name, "");
    }

    #[test]
    fn test_clearing_full_name_clears_saved_name() {
        let mut data = sample();
        data.personal_info.first_name = "Ada".into();
        data.personal_info.last_name = "Lovelace".into();
        let mut state = EditorState::new(ResumeTemplate::Professional);
        state.apply(EditorAction::Load(data));
        state.apply(EditorAction::SetPersonal(PersonalField::FullName, String::new()));
        assert_eq!(state.to_resume_data().personal_info.name, "");
    }
}
