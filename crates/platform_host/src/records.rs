//! Record models persisted per collection key and small collection-editing helpers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Collection keys persisted by the record store.
pub enum Collection {
    /// City catalog (`cities`).
    Cities,
    /// Department catalog (`departments`).
    Departments,
    /// Profession catalog (`professions`).
    Professions,
    /// User directory (`users`).
    Users,
}

impl Collection {
    /// Every persisted collection, in seed order.
    pub const ALL: [Self; 4] = [
        Self::Cities,
        Self::Departments,
        Self::Professions,
        Self::Users,
    ];

    /// Storage key for the collection.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Cities => "cities",
            Self::Departments => "departments",
            Self::Professions => "professions",
            Self::Users => "users",
        }
    }
}

/// Record types addressable by a string id inside a collection.
pub trait StoredRecord {
    /// Returns the record id.
    fn record_id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Named, coded catalog entry shared by cities, departments, and professions.
pub struct CatalogEntry {
    /// Record id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short code.
    pub code: String,
    /// Whether the entry is active.
    pub is_active: bool,
}

impl StoredRecord for CatalogEntry {
    fn record_id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// User directory entry referencing catalog entries by id.
pub struct UserRecord {
    /// Record id.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Login name.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Referenced city id.
    pub city_id: String,
    /// Referenced department id.
    pub department_id: String,
    /// Referenced profession id.
    pub profession_id: String,
    /// Whether the user is active.
    pub is_active: bool,
}

impl StoredRecord for UserRecord {
    fn record_id(&self) -> &str {
        &self.id
    }
}

/// Finds a record by id.
pub fn find_record<'a, T: StoredRecord>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|record| record.record_id() == id)
}

/// Appends a new record at the end of the collection.
pub fn append_record<T: StoredRecord>(records: &mut Vec<T>, record: T) {
    records.push(record);
}

/// Replaces the record sharing `record`'s id in place.
///
/// Returns `false` and leaves the collection untouched when no record has that id.
pub fn replace_record<T: StoredRecord>(records: &mut [T], record: T) -> bool {
    match records
        .iter_mut()
        .find(|existing| existing.record_id() == record.record_id())
    {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}

/// Removes and returns the record with `id`, if present.
pub fn remove_record<T: StoredRecord>(records: &mut Vec<T>, id: &str) -> Option<T> {
    let index = records.iter().position(|record| record.record_id() == id)?;
    Some(records.remove(index))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(id: &str, name: &str) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            name: name.to_string(),
            code: name[..3].to_uppercase(),
            is_active: true,
        }
    }

    #[test]
    fn replace_keeps_position_and_ignores_unknown_ids() {
        let mut records = vec![entry("1", "Bogotá"), entry("2", "Medellín")];

        assert!(replace_record(&mut records, entry("1", "Tunja")));
        assert_eq!(records[0].name, "Tunja");
        assert_eq!(records[1].name, "Medellín");

        assert!(!replace_record(&mut records, entry("9", "Pasto")));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn remove_returns_the_removed_record() {
        let mut records = vec![entry("1", "Bogotá"), entry("2", "Medellín")];
        let removed = remove_record(&mut records, "1").expect("removed");
        assert_eq!(removed.name, "Bogotá");
        assert_eq!(records, vec![entry("2", "Medellín")]);
        assert_eq!(remove_record(&mut records, "1"), None);
    }

    #[test]
    fn user_record_uses_camel_case_foreign_keys() {
        let raw = r#"{"id":"1","name":"Juan Pérez","username":"jperez","email":"jperez@email.com","cityId":"1","departmentId":"2","professionId":"3","isActive":false}"#;
        let user: UserRecord = serde_json::from_str(raw).expect("parse user");
        assert_eq!(user.city_id, "1");
        assert_eq!(user.department_id, "2");
        assert_eq!(user.profession_id, "3");
        assert!(!user.is_active);
        assert_eq!(find_record(&[user.clone()], "1"), Some(&user));
    }
}
