use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Emitted for an actor or title field that carries no text.
pub const MISSING: &str = "---";

/// One person/film pairing, written as `{name: film}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>")]
pub struct AwardEntry {
    pub name: String,
    pub film: String,
}

/// Winners and, when the category had a nominee round, the nominees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResult {
    #[serde(rename = "Winner")]
    pub winner: Vec<AwardEntry>,
    #[serde(rename = "Nominees", default, skip_serializing_if = "Option::is_none")]
    pub nominees: Option<Vec<AwardEntry>>,
}

/// `{category: result}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, CategoryResult>")]
pub struct CategoryRecord {
    pub category: String,
    pub result: CategoryResult,
}

/// `{year: [category, ...]}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<CategoryRecord>>")]
pub struct YearRecord {
    pub year: i32,
    pub categories: Vec<CategoryRecord>,
}

pub type Corpus = Vec<YearRecord>;

impl Serialize for AwardEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.film)?;
        map.end()
    }
}

impl Serialize for CategoryRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.category, &self.result)?;
        map.end()
    }
}

impl Serialize for YearRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // serde_json writes integer map keys as strings: {"1929": [...]}
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.year, &self.categories)?;
        map.end()
    }
}

/// A JSON object that doesn't have the single-key shape of a record.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ShapeError(String);

fn single_entry<V>(map: BTreeMap<String, V>, what: &str) -> Result<(String, V), ShapeError> {
    if map.len() != 1 {
        return Err(ShapeError(format!(
            "{} must be a single-key object, found {} keys",
            what,
            map.len()
        )));
    }
    map.into_iter()
        .next()
        .ok_or_else(|| ShapeError(format!("{} is empty", what)))
}

impl TryFrom<BTreeMap<String, String>> for AwardEntry {
    type Error = ShapeError;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let (name, film) = single_entry(map, "award entry")?;
        Ok(AwardEntry { name, film })
    }
}

impl TryFrom<BTreeMap<String, CategoryResult>> for CategoryRecord {
    type Error = ShapeError;

    fn try_from(map: BTreeMap<String, CategoryResult>) -> Result<Self, Self::Error> {
        let (category, result) = single_entry(map, "category record")?;
        Ok(CategoryRecord { category, result })
    }
}

impl TryFrom<BTreeMap<String, Vec<CategoryRecord>>> for YearRecord {
    type Error = ShapeError;

    fn try_from(map: BTreeMap<String, Vec<CategoryRecord>>) -> Result<Self, Self::Error> {
        let (key, categories) = single_entry(map, "year record")?;
        let year = key
            .parse()
            .map_err(|_| ShapeError(format!("year key {:?} is not an integer", key)))?;
        Ok(YearRecord { year, categories })
    }
}

impl YearRecord {
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(name: &str, film: &str) -> AwardEntry {
        AwardEntry {
            name: name.into(),
            film: film.into(),
        }
    }

    #[test]
    fn entry_is_single_key_object() {
        let v = serde_json::to_value(entry("Emil Jannings", "The Last Command")).unwrap();
        assert_eq!(v, json!({ "Emil Jannings": "The Last Command" }));
    }

    #[test]
    fn nominees_key_omitted_when_absent() {
        let result = CategoryResult {
            winner: vec![entry(MISSING, "Wings")],
            nominees: None,
        };
        let v = serde_json::to_value(&result).unwrap();
        assert_eq!(v, json!({ "Winner": [{ "---": "Wings" }] }));
    }

    #[test]
    fn winner_serialized_before_nominees() {
        let result = CategoryResult {
            winner: vec![],
            nominees: Some(vec![]),
        };
        let s = serde_json::to_string(&result).unwrap();
        assert_eq!(s, r#"{"Winner":[],"Nominees":[]}"#);
    }

    #[test]
    fn year_key_written_as_string() {
        let year = YearRecord {
            year: 1929,
            categories: vec![CategoryRecord {
                category: "Writing".into(),
                result: CategoryResult {
                    winner: vec![],
                    nominees: None,
                },
            }],
        };
        let s = serde_json::to_string(&year).unwrap();
        assert_eq!(s, r#"{"1929":[{"Writing":{"Winner":[]}}]}"#);
    }

    #[test]
    fn multi_key_entry_rejected() {
        let err = serde_json::from_value::<AwardEntry>(json!({ "a": "b", "c": "d" }));
        assert!(err.is_err());
    }

    #[test]
    fn shape_error_names_the_record() {
        let empty = BTreeMap::<String, CategoryResult>::new();
        let err = CategoryRecord::try_from(empty).unwrap_err();
        assert_eq!(
            err.to_string(),
            "category record must be a single-key object, found 0 keys"
        );
        let msg = serde_json::from_value::<AwardEntry>(json!({ "a": "b", "c": "d" }))
            .unwrap_err()
            .to_string();
        assert!(msg.contains("award entry must be a single-key object, found 2 keys"));
    }

    #[test]
    fn non_numeric_year_rejected() {
        let err = serde_json::from_value::<YearRecord>(json!({ "MCMXXIX": [] }));
        assert!(err.is_err());
    }

    #[test]
    fn year_record_loads_back() {
        let v = json!({ "1930": [{ "Directing": { "Winner": [{ "Lewis Milestone": "All Quiet on the Western Front" }], "Nominees": [] } }] });
        let year: YearRecord = serde_json::from_value(v).unwrap();
        assert_eq!(year.year, 1930);
        assert_eq!(year.category_count(), 1);
        assert_eq!(year.categories[0].category, "Directing");
        assert_eq!(year.categories[0].result.nominees, Some(vec![]));
    }
}
