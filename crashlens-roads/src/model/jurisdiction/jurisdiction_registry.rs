use super::Jurisdiction;
use crate::model::RoadDataError;
use indexmap::IndexMap;
use std::path::Path;

const VIRGINIA_JURISDICTIONS: &str = include_str!("../../resources/virginia_jurisdictions.json");

/// read-only lookup of jurisdictions by identifier. iteration follows the
/// declaration order of the source table.
#[derive(Debug, Clone)]
pub struct JurisdictionRegistry {
    jurisdictions: IndexMap<String, Jurisdiction>,
}

impl JurisdictionRegistry {
    /// the 95 counties and 38 independent cities of Virginia, compiled into the binary.
    pub fn virginia() -> Result<JurisdictionRegistry, RoadDataError> {
        Self::from_json_str(VIRGINIA_JURISDICTIONS)
    }

    pub fn from_json_str(s: &str) -> Result<JurisdictionRegistry, RoadDataError> {
        let rows: Vec<Jurisdiction> = serde_json::from_str(s).map_err(|e| {
            RoadDataError::RegistryError(format!("failure decoding jurisdictions: {e}"))
        })?;
        JurisdictionRegistry::try_from(rows)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<JurisdictionRegistry, RoadDataError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            RoadDataError::RegistryError(format!("failure reading {}: {e}", path.display()))
        })?;
        Self::from_json_str(&s)
    }

    pub fn get(&self, id: &str) -> Option<&Jurisdiction> {
        self.jurisdictions.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.jurisdictions.contains_key(id)
    }

    /// all identifiers in table order.
    pub fn ids(&self) -> Vec<String> {
        self.jurisdictions.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Jurisdiction> {
        self.jurisdictions.values()
    }

    pub fn len(&self) -> usize {
        self.jurisdictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jurisdictions.is_empty()
    }
}

impl TryFrom<Vec<Jurisdiction>> for JurisdictionRegistry {
    type Error = RoadDataError;

    fn try_from(rows: Vec<Jurisdiction>) -> Result<Self, Self::Error> {
        let mut jurisdictions = IndexMap::with_capacity(rows.len());
        for row in rows {
            let id = row.id.clone();
            if jurisdictions.insert(id.clone(), row).is_some() {
                return Err(RoadDataError::RegistryError(format!(
                    "jurisdiction '{id}' is declared more than once"
                )));
            }
        }
        Ok(JurisdictionRegistry { jurisdictions })
    }
}
