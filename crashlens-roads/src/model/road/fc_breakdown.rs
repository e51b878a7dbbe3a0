use super::FunctionalClass;
use serde::{ser::SerializeMap, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// road counts per functional class. always carries all seven classes,
/// serialized as an object keyed "1" through "7".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FcBreakdown([usize; 7]);

impl FcBreakdown {
    fn index(fc: &FunctionalClass) -> usize {
        FunctionalClass::ALL
            .iter()
            .position(|c| c == fc)
            .unwrap_or(FunctionalClass::ALL.len() - 1)
    }

    pub fn increment(&mut self, fc: &FunctionalClass) {
        self.0[Self::index(fc)] += 1;
    }

    pub fn get(&self, fc: &FunctionalClass) -> usize {
        self.0[Self::index(fc)]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FunctionalClass, usize)> + '_ {
        FunctionalClass::ALL.iter().copied().zip(self.0.iter().copied())
    }
}

impl Serialize for FcBreakdown {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (fc, count) in self.iter() {
            map.serialize_entry(fc.code(), &count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FcBreakdown {
    fn deserialize<D>(deserializer: D) -> Result<FcBreakdown, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = BTreeMap::<String, usize>::deserialize(deserializer)?;
        let mut counts = [0usize; 7];
        for (code, count) in rows {
            let position = FunctionalClass::ALL
                .iter()
                .position(|fc| fc.code() == code)
                .ok_or_else(|| {
                    serde::de::Error::custom(format!("unknown functional class '{code}'"))
                })?;
            counts[position] = count;
        }
        Ok(FcBreakdown(counts))
    }
}
