use super::html::escape_html;
use super::lookup::*;
use crate::form::{EntrySnapshot, FormSnapshot};

const SECTION_HEADING: &str = "text-xl font-semibold border-b-2 border-gray-300 pb-2 mb-4";

/// Build the preview markup from the current field values
///
/// Pure: the same snapshot always yields the same string.
pub fn render_preview(snapshot: &FormSnapshot) -> String {
    let name = escape_html(&display_name(snapshot));
    let title = escape_html(PROFESSIONAL_TITLE.resolve(snapshot));
    let email = escape_html(EMAIL.resolve(snapshot));
    let phone = escape_html(PHONE.resolve(snapshot));
    let location = escape_html(LOCATION.resolve(snapshot));
    let summary = escape_html(SUMMARY.resolve(snapshot));

    let mut html = String::from(r#"<div class="resume-preview p-8 bg-white shadow-lg">"#);
    html.push_str(&format!(
        r#"<div class="text-center mb-8"><h1 class="text-3xl font-bold text-gray-800">{}</h1><h2 class="text-xl text-gray-600">{}</h2><p class="text-gray-600">{} | {} | {}</p></div>"#,
        name, title, email, phone, location
    ));
    html.push_str(&section("mb-6", "Professional Summary", &format!(r#"<p class="text-gray-700">{}</p>"#, summary)));

    let experience = EXPERIENCE_SECTION.entries(snapshot);
    log::debug!("Found {} experience entries", experience.len());
    if !experience.is_empty() {
        let body: String = experience.iter().map(|e| experience_item(e)).collect();
        html.push_str(&section("mb-6", "Professional Experience", &body));
    }

    let education = EDUCATION_SECTION.entries(snapshot);
    log::debug!("Found {} education entries", education.len());
    if !education.is_empty() {
        let body: String = education.iter().map(|e| education_item(e)).collect();
        html.push_str(&section("mb-6", "Education", &body));
    }

    let skills = SKILLS_SECTION.entries(snapshot);
    log::debug!("Found {} skill entries", skills.len());
    if !skills.is_empty() {
        let chips: String = skills.iter().map(|e| skill_chip(e)).collect();
        html.push_str(&section("", "Skills", &format!(r#"<div class="flex flex-wrap gap-2">{}</div>"#, chips)));
    }

    html.push_str("</div>");
    html
}

/// "{first} {last}" when either half is filled in, otherwise the full-name field
///
/// The "First"/"Last" defaults only pad a half-filled split name. A form with
/// neither half shows the full-name default ("Your Name"), never "First Last".
fn display_name(snapshot: &FormSnapshot) -> String {
    match (FIRST_NAME.find(snapshot), LAST_NAME.find(snapshot)) {
        (None, None) => FULL_NAME.resolve(snapshot).to_string(),
        (first, last) => format!(
            "{} {}",
            first.unwrap_or(FIRST_NAME.default),
            last.unwrap_or(LAST_NAME.default)
        ),
    }
}

fn section(class: &str, heading: &str, body: &str) -> String {
    let open = if class.is_empty() {
        "<div>".to_string()
    } else {
        format!(r#"<div class="{}">"#, class)
    };
    format!(r#"{}<h3 class="{}">{}</h3>{}</div>"#, open, SECTION_HEADING, heading, body)
}

fn dated_header(heading: &str, start: &str, end: &str) -> String {
    format!(
        r#"<div class="flex justify-between"><h4 class="font-semibold text-gray-800">{}</h4><span class="text-gray-600">{} - {}</span></div>"#,
        escape_html(heading),
        escape_html(start),
        escape_html(end)
    )
}

fn experience_item(entry: &EntrySnapshot) -> String {
    format!(
        r#"<div class="mb-4">{}<p class="text-gray-700">{}</p><p class="text-gray-600 mt-2">{}</p></div>"#,
        dated_header(
            EXPERIENCE_POSITION.resolve_in(entry),
            EXPERIENCE_START.resolve_in(entry),
            EXPERIENCE_END.resolve_in(entry),
        ),
        escape_html(EXPERIENCE_COMPANY.resolve_in(entry)),
        escape_html(EXPERIENCE_DESCRIPTION.resolve_in(entry)),
    )
}

fn education_item(entry: &EntrySnapshot) -> String {
    let gpa = EDUCATION_GPA
        .find_in(entry)
        .map(|gpa| format!(r#"<p class="text-gray-600">GPA: {}</p>"#, escape_html(gpa)))
        .unwrap_or_default();
    format!(
        r#"<div class="mb-4">{}<p class="text-gray-700">{}</p>{}</div>"#,
        dated_header(
            EDUCATION_DEGREE.resolve_in(entry),
            EDUCATION_START.resolve_in(entry),
            EDUCATION_END.resolve_in(entry),
        ),
        escape_html(EDUCATION_INSTITUTION.resolve_in(entry)),
        gpa,
    )
}

fn skill_chip(entry: &EntrySnapshot) -> String {
    let level = SKILL_LEVEL
        .find_in(entry)
        .map(|level| format!(" ({})", escape_html(level)))
        .unwrap_or_default();
    format!(
        r#"<span class="bg-gray-200 px-3 py-1 rounded-full text-sm">{}{}</span>"#,
        escape_html(SKILL_NAME.resolve_in(entry)),
        level
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{EntryContainer, FieldControl};

    fn experience(company: &str, position: &str) -> EntrySnapshot {
        EntrySnapshot::div()
            .with_section("experience")
            .with_control(FieldControl::input().with_placeholder("Company Name").with_value(company))
            .with_control(FieldControl::input().with_placeholder("Position").with_value(position))
            .with_control(FieldControl::input().with_placeholder("Start Date").with_value("2020-01"))
            .with_control(FieldControl::input().with_placeholder("End Date").with_value("2023-06"))
            .with_control(FieldControl::textarea().with_placeholder("Description"))
    }

    #[test]
    fn test_empty_form_renders_defaults_only() {
        let html = render_preview(&FormSnapshot::new());
        assert!(html.contains(">Your Name</h1>"));
        assert!(html.contains(">Professional Title<"));
        assert!(html.contains("email@example.com | Phone | Location"));
        assert!(html.contains(r#"<p class="text-gray-700">Professional Summary</p>"#));
        assert!(!html.contains("Professional Experience"));
        assert!(!html.contains("Education"));
        assert!(!html.contains("Skills"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let snapshot = FormSnapshot::new()
            .with_control(FieldControl::input().with_id("name").with_value("Ada Lovelace"))
            .with_container(EntryContainer::new("experienceList").with_child(experience("Acme", "Engineer")));
        assert_eq!(render_preview(&snapshot), render_preview(&snapshot));
    }

    #[test]
    fn test_blank_entry_fields_use_defaults() {
        let snapshot = FormSnapshot::new()
            .with_container(EntryContainer::new("experienceList").with_child(experience("", "  ")));
        let html = render_preview(&snapshot);
        assert!(html.contains(r#"<h4 class="font-semibold text-gray-800">Position</h4>"#));
        assert!(html.contains(r#"<p class="text-gray-700">Company Name</p>"#));
        assert!(html.contains("2020-01 - 2023-06"));
        assert!(html.contains(r#"<p class="text-gray-600 mt-2">Description</p>"#));
    }

    #[test]
    fn test_split_name_fills_missing_half() {
        let snapshot = FormSnapshot::new()
            .with_control(FieldControl::input().with_id("firstName").with_value("Grace"))
            .with_control(FieldControl::input().with_id("name").with_value("Ignored"));
        let html = render_preview(&snapshot);
        assert!(html.contains(">Grace Last</h1>"));
    }

    #[test]
    fn test_blank_split_name_shows_full_name_default() {
        let snapshot = FormSnapshot::new()
            .with_control(FieldControl::input().with_id("firstName"))
            .with_control(FieldControl::input().with_id("lastName").with_value("  "));
        let html = render_preview(&snapshot);
        assert!(html.contains(">Your Name</h1>"));
        assert!(!html.contains("First Last"));
    }

    #[test]
    fn test_values_are_escaped() {
        let snapshot = FormSnapshot::new()
            .with_control(FieldControl::textarea().with_id("summary").with_value("<script>alert(1)</script>"));
        let html = render_preview(&snapshot);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_gpa_and_level_only_when_present() {
        let snapshot = FormSnapshot::new()
            .with_container(
                EntryContainer::new("educationContainer").with_child(
                    EntrySnapshot::div()
                        .with_class("education-entry")
                        .with_control(FieldControl::input().with_placeholder("Degree").with_value("BSc"))
                        .with_control(FieldControl::input().with_placeholder("Graduation Year").with_value("2019"))
                        .with_control(FieldControl::input().with_placeholder("GPA")),
                ),
            )
            .with_container(
                EntryContainer::new("skillsList")
                    .with_child(
                        EntrySnapshot::div()
                            .with_section("skill")
                            .with_control(FieldControl::input().with_placeholder("Skill Name").with_value("Rust"))
                            .with_control(FieldControl::select().with_value("Expert")),
                    )
                    .with_child(
                        EntrySnapshot::div()
                            .with_section("skill")
                            .with_control(FieldControl::input().with_placeholder("Skill Name").with_value("Go")),
                    ),
            );
        let html = render_preview(&snapshot);
        assert!(html.contains(">BSc</h4>"));
        assert!(html.contains("2019 - End Date"));
        assert!(!html.contains("GPA:"));
        assert!(html.contains(">Rust (Expert)</span>"));
        assert!(html.contains(">Go</span>"));
    }

    #[test]
    fn test_sections_render_in_order() {
        let snapshot = FormSnapshot::new()
            .with_container(EntryContainer::new("skillsList").with_child(EntrySnapshot::div()))
            .with_container(EntryContainer::new("experienceList").with_child(experience("Acme", "Engineer")));
        let html = render_preview(&snapshot);
        let experience_at = html.find("Professional Experience").unwrap();
        let skills_at = html.find("Skills").unwrap();
        assert!(experience_at < skills_at);
        assert!(html.contains(">Skill</span>"));
    }
}
