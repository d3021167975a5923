use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub summary: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub linkedin: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub github: String,
}

impl PersonalInfo {
    pub fn get(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::FullName => &self.name,
            PersonalField::FirstName => &self.first_name,
            PersonalField::LastName => &self.last_name,
            PersonalField::Title => &self.title,
            PersonalField::Summary => &self.summary,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
            PersonalField::Location => &self.location,
            PersonalField::Linkedin => &self.linkedin,
            PersonalField::Github => &self.github,
        }
    }

    pub fn set(&mut self, field: PersonalField, value: String) {
        let slot = match field {
            PersonalField::FullName => &mut self.name,
            PersonalField::FirstName => &mut self.first_name,
            PersonalField::LastName => &mut self.last_name,
            PersonalField::Title => &mut self.title,
            PersonalField::Summary => &mut self.summary,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Location => &mut self.location,
            PersonalField::Linkedin => &mut self.linkedin,
            PersonalField::Github => &mut self.github,
        };
        *slot = value;
    }

    /// "{first} {last}" with blank halves dropped; empty when both are blank
    pub fn joined_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Fill the split first/last fields from `name` when both are blank
    pub fn split_name(&mut self) {
        if self.first_name.trim().is_empty() && self.last_name.trim().is_empty() {
            let mut parts = self.name.trim().splitn(2, char::is_whitespace);
            self.first_name = parts.next().unwrap_or_default().to_string();
            self.last_name = parts.next().unwrap_or_default().trim().to_string();
        }
    }
}

/// Personal fields a form layout can expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonalField {
    FullName,
    FirstName,
    LastName,
    Title,
    Summary,
    Email,
    Phone,
    Location,
    Linkedin,
    Github,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub start_date: String,
    pub end_date: String,
    pub gpa: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillEntry {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

/// The full resume document exchanged with `/api/save-resume` and `/api/get-resume`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
}

/// Kind of repeatable sub-record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Experience,
    Education,
    Skill,
}

impl EntryKind {
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Experience => "Experience",
            EntryKind::Education => "Education",
            EntryKind::Skill => "Skills",
        }
    }

    /// Value of the `data-section` attribute carried by entries of this kind
    pub fn data_section(&self) -> &'static str {
        match self {
            EntryKind::Experience => "experience",
            EntryKind::Education => "education",
            EntryKind::Skill => "skill",
        }
    }

    /// Class name carried by entries of this kind
    pub fn entry_class(&self) -> &'static str {
        match self {
            EntryKind::Experience => "experience-entry",
            EntryKind::Education => "education-entry",
            EntryKind::Skill => "skill-entry",
        }
    }
}

/// Individual editable field of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Company,
    Position,
    StartDate,
    EndDate,
    Description,
    Institution,
    Degree,
    Gpa,
    SkillName,
    SkillLevel,
}

/// Field access shared by every entry type so forms can be rendered generically
pub trait EntryFields: Clone + Default + PartialEq {
    fn field(&self, field: EntryField) -> &str;
    fn set_field(&mut self, field: EntryField, value: String);
}

impl EntryFields for ExperienceEntry {
    fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Company => &self.company,
            EntryField::Position => &self.position,
            EntryField::StartDate => &self.start_date,
            EntryField::EndDate => &self.end_date,
            EntryField::Description => &self.description,
            _ => "",
        }
    }

    fn set_field(&mut self, field: EntryField, value: String) {
        match field {
            EntryField::Company => self.company = value,
            EntryField::Position => self.position = value,
            EntryField::StartDate => self.start_date = value,
            EntryField::EndDate => self.end_date = value,
            EntryField::Description => self.description = value,
            other => log::warn!("Experience entries have no {:?} field", other),
        }
    }
}

impl EntryFields for EducationEntry {
    fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Institution => &self.institution,
            EntryField::Degree => &self.degree,
            EntryField::StartDate => &self.start_date,
            EntryField::EndDate => &self.end_date,
            EntryField::Gpa => &self.gpa,
            _ => "",
        }
    }

    fn set_field(&mut self, field: EntryField, value: String) {
        match field {
            EntryField::Institution => self.institution = value,
            EntryField::Degree => self.degree = value,
            EntryField::StartDate => self.start_date = value,
            EntryField::EndDate => self.end_date = value,
            EntryField::Gpa => self.gpa = value,
            other => log::warn!("Education entries have no {:?} field", other),
        }
    }
}

impl EntryFields for SkillEntry {
    fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::SkillName => &self.name,
            EntryField::SkillLevel => &self.level,
            _ => "",
        }
    }

    fn set_field(&mut self, field: EntryField, value: String) {
        match field {
            EntryField::SkillName => self.name = value,
            EntryField::SkillLevel => self.level = value,
            other => log::warn!("Skill entries have no {:?} field", other),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioExperience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
}

/// Body of `POST /api/save-portfolio`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioData {
    pub name: String,
    pub position: String,
    pub about: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub theme: String,
    pub experience: Vec<PortfolioExperience>,
    pub projects: Vec<Project>,
}

/// `{status, message?}` reply of the save endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
}

impl StatusResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// `{status, data}` reply of `GET /api/get-resume`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResumeEnvelope {
    pub status: String,
    #[serde(default)]
    pub data: Option<ResumeData>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_deserializes_empty_personal_info() {
        let json = r#"{"personalInfo": {}, "experience": [], "education": [], "skills": []}"#;
        let data: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(data, ResumeData::default());
    }

    #[test]
    fn test_resume_uses_camel_case_on_the_wire() {
        let mut data = ResumeData::default();
        data.personal_info.name = "Ada Lovelace".to_string();
        data.experience.push(ExperienceEntry {
            company: "Analytical Engines".to_string(),
            start_date: "1842-01".to_string(),
            ..Default::default()
        });

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["personalInfo"]["name"], "Ada Lovelace");
        assert_eq!(value["experience"][0]["startDate"], "1842-01");
        assert!(value["personalInfo"].get("firstName").is_none());
    }

    #[test]
    fn test_joined_name() {
        let mut info = PersonalInfo {
            first_name: "Grace".to_string(),
            last_name: " Hopper ".to_string(),
            ..Default::default()
        };
        assert_eq!(info.joined_name(), "Grace Hopper");

        info.first_name.clear();
        assert_eq!(info.joined_name(), "Hopper");

        info.last_name.clear();
        assert_eq!(info.joined_name(), "");
    }

    #[test]
    fn test_split_name_fills_blank_halves() {
        let mut info = PersonalInfo {
            name: "Ada King Lovelace".to_string(),
            ..Default::default()
        };
        info.split_name();
        assert_eq!(info.first_name, "Ada");
        assert_eq!(info.last_name, "King Lovelace");

        let mut mononym = PersonalInfo {
            name: "Plato".to_string(),
            ..Default::default()
        };
        mononym.split_name();
        assert_eq!(mononym.first_name, "Plato");
        assert_eq!(mononym.last_name, "");
    }

    #[test]
    fn test_entry_fields_ignore_foreign_fields() {
        let mut entry = SkillEntry::default();
        entry.set_field(EntryField::SkillName, "Rust".to_string());
        entry.set_field(EntryField::Company, "ignored".to_string());
        assert_eq!(entry.field(EntryField::SkillName), "Rust");
        assert_eq!(entry.field(EntryField::Company), "");
    }

    #[test]
    fn test_status_response_optional_fields() {
        let reply: StatusResponse = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(reply.is_success());
        assert!(reply.message.is_none());
        assert!(reply.redirect_url.is_none());
    }
}
