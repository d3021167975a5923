use crate::lists::{EntryKey, KeyedList};
use crate::scene::Theme;
use crate::types::{PortfolioData, PortfolioExperience, Project};
use std::rc::Rc;
use yew::Reducible;

/// Single-value fields of the portfolio form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PortfolioField {
    Name,
    Position,
    About,
    Email,
    Phone,
    Linkedin,
    Github,
}

impl PortfolioField {
    pub const ALL: [PortfolioField; 7] = [
        PortfolioField::Name,
        PortfolioField::Position,
        PortfolioField::About,
        PortfolioField::Email,
        PortfolioField::Phone,
        PortfolioField::Linkedin,
        PortfolioField::Github,
    ];

    /// Element id and name attribute
    pub fn id(&self) -> &'static str {
        match self {
            PortfolioField::Name => "name",
            PortfolioField::Position => "position",
            PortfolioField::About => "about",
            PortfolioField::Email => "email",
            PortfolioField::Phone => "phone",
            PortfolioField::Linkedin => "linkedin",
            PortfolioField::Github => "github",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PortfolioField::Name => "Name",
            PortfolioField::Position => "Position",
            PortfolioField::About => "About",
            PortfolioField::Email => "Email",
            PortfolioField::Phone => "Phone",
            PortfolioField::Linkedin => "LinkedIn",
            PortfolioField::Github => "GitHub",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            PortfolioField::Email => "email",
            PortfolioField::Phone => "tel",
            PortfolioField::Linkedin | PortfolioField::Github => "url",
            _ => "text",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceField {
    Title,
    Company,
    Duration,
    Description,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Description,
}

/// Everything the portfolio editor form holds
#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioState {
    pub data: PortfolioData,
    pub experience: KeyedList<PortfolioExperience>,
    pub projects: KeyedList<Project>,
    /// Theme picked in the select
    pub theme: Theme,
    /// Theme shown on the stage; the default box until the first submit
    pub stage_theme: Theme,
}

pub enum PortfolioAction {
    SetField(PortfolioField, String),
    SelectTheme(Theme),
    AddExperience,
    RemoveExperience(EntryKey),
    SetExperience(EntryKey, ExperienceField, String),
    AddProject,
    RemoveProject(EntryKey),
    SetProject(EntryKey, ProjectField, String),
    ApplyTheme,
}

impl PortfolioState {
    /// A form with one blank experience and one blank project, `theme` preselected
    pub fn new(theme: Theme) -> Self {
        let mut experience = KeyedList::new();
        experience.push_blank();
        let mut projects = KeyedList::new();
        projects.push_blank();
        Self {
            data: PortfolioData::default(),
            experience,
            projects,
            theme,
            stage_theme: Theme::Fallback,
        }
    }

    pub fn field(&self, field: PortfolioField) -> &str {
        match field {
            PortfolioField::Name => &self.data.name,
            PortfolioField::Position => &self.data.position,
            PortfolioField::About => &self.data.about,
            PortfolioField::Email => &self.data.email,
            PortfolioField::Phone => &self.data.phone,
            PortfolioField::Linkedin => &self.data.linkedin,
            PortfolioField::Github => &self.data.github,
        }
    }

    pub fn apply(&mut self, action: PortfolioAction) {
        match action {
            PortfolioAction::SetField(field, value) => {
                let slot = match field {
                    PortfolioField::Name => &mut self.data.name,
                    PortfolioField::Position => &mut self.data.position,
                    PortfolioField::About => &mut self.data.about,
                    PortfolioField::Email => &mut self.data.email,
                    PortfolioField::Phone => &mut self.data.phone,
                    PortfolioField::Linkedin => &mut self.data.linkedin,
                    PortfolioField::Github => &mut self.data.github,
                };
                *slot = value;
            }
            PortfolioAction::SelectTheme(theme) => self.theme = theme,
            PortfolioAction::AddExperience => {
                self.experience.push_blank();
            }
            PortfolioAction::RemoveExperience(key) => {
                if self.experience.remove(key).is_none() {
                    log::warn!("No experience entry #{} to remove", key);
                }
            }
            PortfolioAction::SetExperience(key, field, value) => match self.experience.get_mut(key) {
                Some(entry) => match field {
                    ExperienceField::Title => entry.title = value,
                    ExperienceField::Company => entry.company = value,
                    ExperienceField::Duration => entry.duration = value,
                    ExperienceField::Description => entry.description = value,
                },
                None => log::warn!("No experience entry #{} to edit", key),
            },
            PortfolioAction::AddProject => {
                self.projects.push_blank();
            }
            PortfolioAction::RemoveProject(key) => {
                if self.projects.remove(key).is_none() {
                    log::warn!("No project #{} to remove", key);
                }
            }
            PortfolioAction::SetProject(key, field, value) => match self.projects.get_mut(key) {
                Some(project) => match field {
                    ProjectField::Title => project.title = value,
                    ProjectField::Description => project.description = value,
                },
                None => log::warn!("No project #{} to edit", key),
            },
            PortfolioAction::ApplyTheme => self.stage_theme = self.theme,
        }
    }

    /// The document sent to `/api/save-portfolio`
    pub fn to_portfolio_data(&self) -> PortfolioData {
        PortfolioData {
            theme: self.theme.as_str().to_string(),
            experience: self.experience.to_vec(),
            projects: self.projects.to_vec(),
            ..self.data.clone()
        }
    }
}

impl Reducible for PortfolioState {
    type Action = PortfolioAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_starts_with_one_blank_entry_each() {
        let state = PortfolioState::new(Theme::Creative);
        assert_eq!(state.experience.len(), 1);
        assert_eq!(state.projects.len(), 1);
        assert_eq!(state.theme, Theme::Creative);
        assert_eq!(state.stage_theme, Theme::Fallback);
    }

    #[test]
    fn test_lists_and_fields_flow_into_payload() {
        let mut state = PortfolioState::new(Theme::Modern);
        state.apply(PortfolioAction::SetField(PortfolioField::Name, "Ada".into()));
        state.apply(PortfolioAction::AddExperience);

        let keys: Vec<EntryKey> = state.experience.iter().map(|(k, _)| k).collect();
        state.apply(PortfolioAction::SetExperience(keys[1], ExperienceField::Company, "Acme".into()));
        state.apply(PortfolioAction::RemoveExperience(keys[0]));
        let project = state.projects.last_key().unwrap();
        state.apply(PortfolioAction::SetProject(project, ProjectField::Title, "Engine".into()));

        let data = state.to_portfolio_data();
        assert_eq!(data.name, "Ada");
        assert_eq!(data.theme, "modern");
        assert_eq!(data.experience.len(), 1);
        assert_eq!(data.experience[0].company, "Acme");
        assert_eq!(data.projects[0].title, "Engine");
    }

    #[test]
    fn test_stage_theme_changes_only_on_apply() {
        let mut state = PortfolioState::new(Theme::Modern);
        state.apply(PortfolioAction::SelectTheme(Theme::Creative));
        assert_eq!(state.stage_theme, Theme::Fallback);
        assert_eq!(state.to_portfolio_data().theme, "creative");

        state.apply(PortfolioAction::ApplyTheme);
        assert_eq!(state.stage_theme, Theme::Creative);
    }

    #[test]
    fn test_payload_serializes_like_the_form() {
        let mut state = PortfolioState::new(Theme::Minimal);
        let blank = state.experience.last_key().unwrap();
        state.apply(PortfolioAction::RemoveExperience(blank));
        let value = serde_json::to_value(state.to_portfolio_data()).unwrap();
        assert_eq!(value["theme"], "minimal");
        assert_eq!(value["projects"][0]["title"], "");
        assert!(value["experience"].as_array().unwrap().is_empty());
    }
}
