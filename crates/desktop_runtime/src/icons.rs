//! Static icon lookup for window content types.
//!
//! Descriptors only carry the [`ContentType`] tag; title bars, taskbar entries, and launcher items
//! resolve their glyph here at render time.

use system_ui::IconName;

use crate::model::ContentType;

/// Icon shown for windows of `content_type`.
pub fn content_icon(content_type: ContentType) -> IconName {
    match content_type {
        ContentType::City => IconName::Building,
        ContentType::Department => IconName::Map,
        ContentType::Profession => IconName::Briefcase,
        ContentType::About => IconName::Info,
        ContentType::User => IconName::People,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_content_type_has_a_distinct_icon() {
        let icons: HashSet<_> = ContentType::ALL.into_iter().map(content_icon).collect();
        assert_eq!(icons.len(), ContentType::ALL.len());
    }
}
