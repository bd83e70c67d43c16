//! First-run seed records for every persisted collection.

use crate::{
    has_collection, try_set_records, CatalogEntry, Collection, RecordStore, RecordStoreError,
    UserRecord,
};

fn catalog(rows: &[(&str, &str, &str)]) -> Vec<CatalogEntry> {
    rows.iter()
        .map(|(id, name, code)| CatalogEntry {
            id: (*id).to_string(),
            name: (*name).to_string(),
            code: (*code).to_string(),
            is_active: true,
        })
        .collect()
}

/// Seed cities.
pub fn seed_cities() -> Vec<CatalogEntry> {
    catalog(&[
        ("1", "Bogotá", "BOG"),
        ("2", "Medellín", "MED"),
        ("3", "Cali", "CAL"),
    ])
}

/// Seed departments.
pub fn seed_departments() -> Vec<CatalogEntry> {
    catalog(&[
        ("1", "Cundinamarca", "CUN"),
        ("2", "Antioquia", "ANT"),
        ("3", "Valle del Cauca", "VAL"),
    ])
}

/// Seed professions.
pub fn seed_professions() -> Vec<CatalogEntry> {
    catalog(&[
        ("1", "Ingeniero de Software", "IS"),
        ("2", "Médico", "MD"),
        ("3", "Arquitecto", "ARQ"),
    ])
}

/// Seed users; foreign keys point at the seed catalogs.
pub fn seed_users() -> Vec<UserRecord> {
    [
        ("1", "Juan Pérez", "jperez", "jperez@email.com"),
        ("2", "María Gómez", "mgomez", "mgomez@email.com"),
    ]
    .into_iter()
    .map(|(id, name, username, email)| UserRecord {
        id: id.to_string(),
        name: name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        city_id: id.to_string(),
        department_id: id.to_string(),
        profession_id: id.to_string(),
        is_active: true,
    })
    .collect()
}

/// Writes the seed records for one collection.
///
/// # Errors
///
/// Returns an error when the store rejects the write.
pub fn seed_records_for<S: RecordStore + ?Sized>(
    store: &S,
    collection: Collection,
) -> Result<(), RecordStoreError> {
    let key = collection.key();
    match collection {
        Collection::Cities => try_set_records(store, key, &seed_cities()),
        Collection::Departments => try_set_records(store, key, &seed_departments()),
        Collection::Professions => try_set_records(store, key, &seed_professions()),
        Collection::Users => try_set_records(store, key, &seed_users()),
    }
}

/// Seeds every collection whose key is absent or blank and returns the seeded collections.
///
/// Collections already holding content are never overwritten.
///
/// # Errors
///
/// Returns the first store write failure; collections seeded before it stay written.
pub fn seed_missing_collections<S: RecordStore + ?Sized>(
    store: &S,
) -> Result<Vec<Collection>, RecordStoreError> {
    let mut seeded = Vec::new();
    for collection in Collection::ALL {
        if has_collection(store, collection.key()) {
            continue;
        }
        seed_records_for(store, collection)?;
        seeded.push(collection);
    }
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{get_records, set_records, MemoryRecordStore};

    #[test]
    fn first_run_seeds_every_collection() {
        let store = MemoryRecordStore::default();
        let seeded = seed_missing_collections(&store).expect("seed");
        assert_eq!(seeded, Collection::ALL.to_vec());

        let cities: Vec<CatalogEntry> = get_records(&store, "cities");
        assert_eq!(
            cities.iter().map(|c| c.code.as_str()).collect::<Vec<_>>(),
            vec!["BOG", "MED", "CAL"]
        );
        let users: Vec<UserRecord> = get_records(&store, "users");
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].username, "mgomez");
        assert_eq!(users[1].city_id, "2");
    }

    #[test]
    fn seeding_is_idempotent_and_never_overwrites_present_keys() {
        let store = MemoryRecordStore::default();
        let custom = vec![CatalogEntry {
            id: "x".to_string(),
            name: "Tunja".to_string(),
            code: "TUN".to_string(),
            is_active: false,
        }];
        assert!(set_records(&store, "cities", &custom));

        let seeded = seed_missing_collections(&store).expect("seed");
        assert_eq!(
            seeded,
            vec![
                Collection::Departments,
                Collection::Professions,
                Collection::Users
            ]
        );
        let cities: Vec<CatalogEntry> = get_records(&store, "cities");
        assert_eq!(cities, custom);

        assert_eq!(seed_missing_collections(&store).expect("reseed"), Vec::new());
    }
}
