use serde::de::{self, Deserializer, IgnoredAny};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Stable identifier that becomes an enum constant in the generated tables.
pub type Id = String;

/// Top-level dungeon description as loaded from `adventure.yaml`.
///
/// Only the collections the table generator emits are modelled; any other
/// top-level key in the document is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DungeonDef {
    pub arbitrary_messages: Entries<String>,
    pub class_messages: Entries<String>,
    pub turn_threshold_messages: Entries<String>,
    pub locations: Entries<LocationDef>,
    pub object_descriptions: Entries<ObjectDescriptionDef>,
    pub obituaries: Vec<ObituaryDef>,
}

impl DungeonDef {
    /// Number of player classes, i.e. entries under `class_messages`.
    pub fn class_count(&self) -> usize {
        self.class_messages.len()
    }

    /// Number of deaths the player may suffer, i.e. entries under `obituaries`.
    pub fn maximum_deaths(&self) -> usize {
        self.obituaries.len()
    }
}

/// A single `ID: value` pair from an ordered collection.
///
/// `value` is `None` when the document gives no usable value for the entry
/// (null, or a value of the wrong shape).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    pub id: Id,
    pub value: Option<T>,
}

/// Ordered collection of identified entries.
///
/// Written in YAML as a sequence of single-key mappings (`- LOC_START: {...}`),
/// which is also how an `!!omap` is laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entries<T>(Vec<Entry<T>>);

impl<T> Entries<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T>> {
        self.0.iter()
    }

    /// Identifiers in document order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|entry| entry.id.as_str())
    }
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> FromIterator<(Id, Option<T>)> for Entries<T> {
    fn from_iter<I: IntoIterator<Item = (Id, Option<T>)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, value)| Entry { id, value }).collect())
    }
}

impl<'a, T> IntoIterator for &'a Entries<T> {
    type Item = &'a Entry<T>;
    type IntoIter = std::slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<BTreeMap<Id, Lenient<T>>>::deserialize(deserializer)?;
        let mut entries = Vec::with_capacity(raw.len());
        for (index, pair) in raw.into_iter().enumerate() {
            let count = pair.len();
            let mut pair = pair.into_iter();
            match (pair.next(), pair.next()) {
                (Some((id, value)), None) => entries.push(Entry {
                    id,
                    value: value.into_option(),
                }),
                _ => {
                    return Err(de::Error::custom(format!(
                        "entry {index}: expected a single `ID: value` mapping, found {count} keys"
                    )));
                },
            }
        }
        Ok(Self(entries))
    }
}

/// Location record. Everything except the description is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LocationDef {
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<DescriptionsDef>,
}

/// Short and long room descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DescriptionsDef {
    #[serde(default, deserialize_with = "lenient")]
    pub short: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub long: Option<String>,
}

/// Object description record: inventory line plus per-state long descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ObjectDescriptionDef {
    #[serde(default, deserialize_with = "lenient")]
    pub inventory: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub longs: Option<Vec<String>>,
}

/// Reincarnation prompt shown after a death. Both fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObituaryDef {
    pub query: String,
    pub yes_response: String,
}

/// Accepts any value, keeping it only when it has the expected shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Present(T),
    Other(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Lenient::Present(value) => Some(value),
            Lenient::Other(_) => None,
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Lenient::<T>::deserialize(deserializer).map(Lenient::into_option)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(yaml: &str) -> Entries<String> {
        serde_yaml::from_str(yaml).expect("entries parse")
    }

    #[test]
    fn entries_keep_document_order() {
        let entries = messages("- ZULU: z\n- ALPHA: a\n- MIKE: m\n");
        assert_eq!(entries.ids().collect::<Vec<_>>(), vec!["ZULU", "ALPHA", "MIKE"]);
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn null_message_text_is_absent() {
        let entries = messages("- NO_MESSAGE: null\n- HELLO: Hi there.\n- EMPTY: ''\n");
        let values: Vec<_> = entries.iter().map(|e| e.value.as_deref()).collect();
        assert_eq!(values, vec![None, Some("Hi there."), Some("")]);
    }

    #[test]
    fn multi_key_entry_is_rejected() {
        let err = serde_yaml::from_str::<Entries<String>>("- A: one\n  B: two\n").unwrap_err();
        assert!(err.to_string().contains("found 2 keys"), "{err}");
    }

    #[test]
    fn location_without_description_degrades_to_none() {
        let locations: Entries<LocationDef> = serde_yaml::from_str(
            "- LOC_NOWHERE: null\n\
             - LOC_PLAIN: {conditions: {LIT: true}}\n\
             - LOC_ODD: just a string\n\
             - LOC_HALF:\n    description:\n      short: A small room.\n      long: null\n",
        )
        .expect("locations parse");
        let descs: Vec<_> = locations
            .iter()
            .map(|e| e.value.as_ref().and_then(|l| l.description.clone()))
            .collect();
        assert_eq!(descs[0], None);
        assert_eq!(descs[1], None);
        assert_eq!(descs[2], None);
        assert_eq!(
            descs[3],
            Some(DescriptionsDef {
                short: Some("A small room.".into()),
                long: None,
            })
        );
    }

    #[test]
    fn object_longs_keep_empty_and_absent_apart_in_the_model() {
        let objects: Entries<ObjectDescriptionDef> = serde_yaml::from_str(
            "- OBJ_LAMP: {inventory: A lamp}\n\
             - OBJ_NONE: {inventory: null, longs: []}\n\
             - OBJ_ROD: {longs: [You see a rod., It's heavy.]}\n",
        )
        .expect("objects parse");
        let values: Vec<_> = objects.iter().map(|e| e.value.clone().unwrap_or_default()).collect();
        assert_eq!(values[0].inventory.as_deref(), Some("A lamp"));
        assert_eq!(values[0].longs, None);
        assert_eq!(values[1].inventory, None);
        assert_eq!(values[1].longs, Some(Vec::new()));
        assert_eq!(
            values[2].longs,
            Some(vec!["You see a rod.".to_string(), "It's heavy.".to_string()])
        );
    }

    #[test]
    fn obituary_requires_both_fields() {
        let ok: Vec<ObituaryDef> =
            serde_yaml::from_str("- query: Did you die?\n  yes_response: Yes\n").expect("obituary parse");
        assert_eq!(ok[0].yes_response, "Yes");
        assert!(serde_yaml::from_str::<Vec<ObituaryDef>>("- query: Did you die?\n").is_err());
    }

    #[test]
    fn derived_counts_follow_collection_sizes() {
        let dungeon = DungeonDef {
            class_messages: [("A".to_string(), None), ("B".to_string(), Some("b".to_string()))]
                .into_iter()
                .collect(),
            obituaries: vec![
                ObituaryDef {
                    query: "q".into(),
                    yes_response: "y".into(),
                };
                5
            ],
            ..DungeonDef::default()
        };
        assert_eq!(dungeon.class_count(), 2);
        assert_eq!(dungeon.maximum_deaths(), 5);
    }
}
