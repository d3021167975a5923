use crate::types::{EducationEntry, EntryField, EntryFields, EntryKind, ExperienceEntry, ResumeData, SkillEntry};

/// Local handle for an entry, stable while the entry lives in its list
pub type EntryKey = u64;

/// Ordered list of repeatable entries addressed by key
///
/// Order is visual order. Keys are never reused within one list, so a stale key
/// from an already-removed entry can't hit a newer one.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyedList<T> {
    entries: Vec<(EntryKey, T)>,
    next_key: EntryKey,
}

impl<T> Default for KeyedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> KeyedList<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_key: 1,
        }
    }

    /// Append an entry and return its key
    pub fn push(&mut self, entry: T) -> EntryKey {
        let key = self.next_key;
        self.next_key += 1;
        self.entries.push((key, entry));
        key
    }

    /// Remove an entry by key
    pub fn remove(&mut self, key: EntryKey) -> Option<T> {
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn get(&self, key: EntryKey) -> Option<&T> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, e)| e)
    }

    pub fn get_mut(&mut self, key: EntryKey) -> Option<&mut T> {
        self.entries.iter_mut().find(|(k, _)| *k == key).map(|(_, e)| e)
    }

    /// Key of the last entry, if any
    pub fn last_key(&self) -> Option<EntryKey> {
        self.entries.last().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryKey, &T)> {
        self.entries.iter().map(|(k, e)| (*k, e))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, e)| e)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: Default> KeyedList<T> {
    /// Append a blank entry and return its key
    pub fn push_blank(&mut self) -> EntryKey {
        self.push(T::default())
    }
}

impl<T: Clone> KeyedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.values().cloned().collect()
    }
}

/// The three dynamic sections of the resume editor
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryLists {
    pub experience: KeyedList<ExperienceEntry>,
    pub education: KeyedList<EducationEntry>,
    pub skills: KeyedList<SkillEntry>,
}

impl EntryLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank entry of the given kind
    pub fn add_entry(&mut self, kind: EntryKind) -> EntryKey {
        let key = match kind {
            EntryKind::Experience => self.experience.push_blank(),
            EntryKind::Education => self.education.push_blank(),
            EntryKind::Skill => self.skills.push_blank(),
        };
        log::debug!("Added {} entry #{}", kind.data_section(), key);
        key
    }

    /// Detach one entry; unknown keys are logged and ignored
    pub fn remove_entry(&mut self, kind: EntryKind, key: EntryKey) -> bool {
        let removed = match kind {
            EntryKind::Experience => self.experience.remove(key).is_some(),
            EntryKind::Education => self.education.remove(key).is_some(),
            EntryKind::Skill => self.skills.remove(key).is_some(),
        };
        if !removed {
            log::warn!("No {} entry #{} to remove", kind.data_section(), key);
        }
        removed
    }

    /// Edit one field of one entry in place
    pub fn set_field(&mut self, kind: EntryKind, key: EntryKey, field: EntryField, value: String) {
        let updated = match kind {
            EntryKind::Experience => set_entry_field(&mut self.experience, key, field, value),
            EntryKind::Education => set_entry_field(&mut self.education, key, field, value),
            EntryKind::Skill => set_entry_field(&mut self.skills, key, field, value),
        };
        if !updated {
            log::warn!("No {} entry #{} to edit", kind.data_section(), key);
        }
    }

    pub fn len(&self, kind: EntryKind) -> usize {
        match kind {
            EntryKind::Experience => self.experience.len(),
            EntryKind::Education => self.education.len(),
            EntryKind::Skill => self.skills.len(),
        }
    }

    /// Rebuild every list from loaded data
    ///
    /// Blank entries are created first, then filled, the same path a user takes.
    pub fn load(&mut self, data: &ResumeData) {
        self.experience.clear();
        self.education.clear();
        self.skills.clear();

        for entry in &data.experience {
            let key = self.add_entry(EntryKind::Experience);
            if let Some(slot) = self.experience.get_mut(key) {
                *slot = entry.clone();
            }
        }
        for entry in &data.education {
            let key = self.add_entry(EntryKind::Education);
            if let Some(slot) = self.education.get_mut(key) {
                *slot = entry.clone();
            }
        }
        for entry in &data.skills {
            let key = self.add_entry(EntryKind::Skill);
            if let Some(slot) = self.skills.get_mut(key) {
                *slot = entry.clone();
            }
        }
    }
}

fn set_entry_field<T: EntryFields>(
    list: &mut KeyedList<T>,
    key: EntryKey,
    field: EntryField,
    value: String,
) -> bool {
    match list.get_mut(key) {
        Some(entry) => {
            entry.set_field(field, value);
            true
        }
        None => false,
    }
}
