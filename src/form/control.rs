/// Kind of form control that can carry resume data
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlTag {
    Input,
    Textarea,
    Select,
}

impl ControlTag {
    /// Map a DOM tag name (any case) to a control kind
    pub fn from_tag_name(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "input" => Some(ControlTag::Input),
            "textarea" => Some(ControlTag::Textarea),
            "select" => Some(ControlTag::Select),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ControlTag::Input => "input",
            ControlTag::Textarea => "textarea",
            ControlTag::Select => "select",
        }
    }
}

/// A single form control as seen by the preview: its identifying attributes and current value
#[derive(Clone, Debug, PartialEq)]
pub struct FieldControl {
    pub tag: ControlTag,
    pub id: Option<String>,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub input_type: Option<String>,
    pub value: String,
}

impl FieldControl {
    pub fn new(tag: ControlTag) -> Self {
        Self {
            tag,
            id: None,
            name: None,
            placeholder: None,
            input_type: None,
            value: String::new(),
        }
    }

    pub fn input() -> Self {
        Self::new(ControlTag::Input)
    }

    pub fn textarea() -> Self {
        Self::new(ControlTag::Textarea)
    }

    pub fn select() -> Self {
        Self::new(ControlTag::Select)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// The trimmed value, or `None` when blank
    pub fn trimmed_value(&self) -> Option<&str> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}
