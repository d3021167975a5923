mod control;
mod layout;
mod scan;
mod selector;
mod snapshot;

pub use control::*;
pub use layout::*;
pub use scan::scan_document;
pub use selector::*;
pub use snapshot::*;

/// Every element id that may hold a dynamic list of entries
pub const ENTRY_CONTAINER_IDS: [&str; 6] = [
    "experienceList",
    "experienceContainer",
    "educationList",
    "educationContainer",
    "skillsList",
    "skillsContainer",
];
