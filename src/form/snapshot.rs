use super::control::FieldControl;
use super::selector::{EntryStrategy, Selector};

/// A direct child of a list container, usually one entry sub-form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntrySnapshot {
    /// Lowercase tag name of the child element
    pub tag: String,
    pub data_section: Option<String>,
    pub classes: Vec<String>,
    /// Controls inside the entry, in document order
    pub controls: Vec<FieldControl>,
}

impl EntrySnapshot {
    pub fn div() -> Self {
        Self {
            tag: "div".to_string(),
            ..Default::default()
        }
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.data_section = Some(section.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_control(mut self, control: FieldControl) -> Self {
        self.controls.push(control);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// First control inside this entry matching the selector
    pub fn find(&self, selector: &Selector) -> Option<&FieldControl> {
        self.controls.iter().find(|c| selector.matches(c))
    }
}

/// A list container and its children
#[derive(Clone, Debug, PartialEq)]
pub struct EntryContainer {
    pub id: String,
    pub children: Vec<EntrySnapshot>,
}

impl EntryContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: EntrySnapshot) -> Self {
        self.children.push(child);
        self
    }
}

/// Point-in-time view of every resume control on the page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSnapshot {
    /// All controls in document order, including those inside entries
    pub controls: Vec<FieldControl>,
    /// List containers that exist on the page
    pub containers: Vec<EntryContainer>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_control(mut self, control: FieldControl) -> Self {
        self.controls.push(control);
        self
    }

    /// Add a container; its entry controls are also appended to the document-wide list
    pub fn with_container(mut self, container: EntryContainer) -> Self {
        for child in &container.children {
            self.controls.extend(child.controls.iter().cloned());
        }
        self.containers.push(container);
        self
    }

    /// First control in document order matching the selector
    pub fn find(&self, selector: &Selector) -> Option<&FieldControl> {
        self.controls.iter().find(|c| selector.matches(c))
    }

    pub fn container(&self, id: &str) -> Option<&EntryContainer> {
        self.containers.iter().find(|c| c.id == id)
    }

    /// Entries of one section
    ///
    /// Containers are tried in order; inside each present container the
    /// strategies are tried in order and the first one that recognises any
    /// child wins. A container where nothing matches falls through to the next.
    pub fn entries(&self, container_ids: &[&str], strategies: &[EntryStrategy]) -> Vec<&EntrySnapshot> {
        for id in container_ids {
            let Some(container) = self.container(id) else {
                continue;
            };
            for strategy in strategies {
                let found: Vec<&EntrySnapshot> = container
                    .children
                    .iter()
                    .filter(|child| strategy.matches(child))
                    .collect();
                if !found.is_empty() {
                    return found;
                }
            }
        }
        Vec::new()
    }
}
