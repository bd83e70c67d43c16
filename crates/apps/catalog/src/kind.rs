use platform_host::{Collection, SubmitOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Catalog collections sharing the name/code/active record shape.
pub enum CatalogKind {
    /// Cities catalog.
    City,
    /// Departments catalog.
    Department,
    /// Professions catalog.
    Profession,
}

impl CatalogKind {
    /// Persisted collection backing this catalog.
    pub const fn collection(self) -> Collection {
        match self {
            Self::City => Collection::Cities,
            Self::Department => Collection::Departments,
            Self::Profession => Collection::Professions,
        }
    }

    /// Capitalized singular noun used in notices.
    pub const fn noun(self) -> &'static str {
        match self {
            Self::City => "Ciudad",
            Self::Department => "Departamento",
            Self::Profession => "Profesión",
        }
    }

    const fn feminine(self) -> bool {
        matches!(self, Self::City | Self::Profession)
    }

    const fn with_article(self) -> &'static str {
        match self {
            Self::City => "la ciudad",
            Self::Department => "el departamento",
            Self::Profession => "la profesión",
        }
    }

    fn participle(self, stem: &str) -> String {
        format!("{stem}{}", if self.feminine() { "a" } else { "o" })
    }

    /// Placeholder for the name input.
    pub const fn name_placeholder(self) -> &'static str {
        match self {
            Self::City => "Nombre de la ciudad",
            Self::Department => "Nombre del departamento",
            Self::Profession => "Nombre de la profesión",
        }
    }

    /// Table message shown when the collection is empty.
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::City => "No hay ciudades registradas",
            Self::Department => "No hay departamentos registrados",
            Self::Profession => "No hay profesiones registradas",
        }
    }

    /// Success notice after an accepted draft.
    pub fn saved_notice(self, name: &str, outcome: SubmitOutcome) -> String {
        let verb = match outcome {
            SubmitOutcome::Created => self.participle("agregad"),
            SubmitOutcome::Updated => self.participle("actualizad"),
        };
        format!("{} \"{name}\" {verb} correctamente", self.noun())
    }

    /// Success notice after a delete.
    pub fn deleted_notice(self) -> String {
        format!("{} {} correctamente", self.noun(), self.participle("eliminad"))
    }

    /// Confirmation prompt shown before a delete.
    pub fn delete_prompt(self, name: &str) -> String {
        format!("¿Está seguro de eliminar {} \"{name}\"?", self.with_article())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn notices_agree_with_the_noun_gender() {
        assert_eq!(
            CatalogKind::City.saved_notice("Pasto", SubmitOutcome::Created),
            "Ciudad \"Pasto\" agregada correctamente"
        );
        assert_eq!(
            CatalogKind::Department.saved_notice("Boyacá", SubmitOutcome::Updated),
            "Departamento \"Boyacá\" actualizado correctamente"
        );
        assert_eq!(
            CatalogKind::Profession.deleted_notice(),
            "Profesión eliminada correctamente"
        );
        assert_eq!(
            CatalogKind::Department.delete_prompt("Antioquia"),
            "¿Está seguro de eliminar el departamento \"Antioquia\"?"
        );
    }

    #[test]
    fn each_kind_maps_to_its_collection_key() {
        assert_eq!(CatalogKind::City.collection().key(), "cities");
        assert_eq!(CatalogKind::Department.collection().key(), "departments");
        assert_eq!(CatalogKind::Profession.collection().key(), "professions");
    }
}
