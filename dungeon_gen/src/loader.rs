//! Loading of the YAML dungeon description.

use std::fs;
use std::path::Path;

use dungeon_data::DungeonDef;
use log::info;
use serde_yaml::Value;

use crate::GenError;

/// Read and parse the dungeon description at `path`.
///
/// # Errors
/// - `GenError::Read` if the file cannot be read.
/// - `GenError::Parse` if it is not valid YAML or does not match `DungeonDef`
///   (for instance an obituary without a `yes_response`).
pub fn load_dungeon(path: &Path) -> Result<DungeonDef, GenError> {
    let src = fs::read_to_string(path).map_err(|source| GenError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let dungeon = parse_dungeon(&src)?;
    info!(
        "loaded {} locations, {} object descriptions and {} obituaries from {}",
        dungeon.locations.len(),
        dungeon.object_descriptions.len(),
        dungeon.obituaries.len(),
        path.display()
    );
    Ok(dungeon)
}

/// Parse a dungeon description from YAML text.
///
/// YAML tags such as `!!omap` are dropped before the document is mapped onto
/// `DungeonDef`; only the tagged value's structure matters.
///
/// # Errors
/// Returns `GenError::Parse` for malformed YAML or a document missing one of the
/// required collections or obituary fields.
pub fn parse_dungeon(src: &str) -> Result<DungeonDef, GenError> {
    let mut value: Value = serde_yaml::from_str(src)?;
    strip_tags(&mut value);
    Ok(serde_yaml::from_value(value)?)
}

fn strip_tags(value: &mut Value) {
    match value {
        Value::Tagged(tagged) => {
            let inner = std::mem::replace(&mut tagged.value, Value::Null);
            *value = inner;
            strip_tags(value);
        },
        Value::Sequence(seq) => seq.iter_mut().for_each(strip_tags),
        Value::Mapping(map) => {
            for (_, v) in map.iter_mut() {
                strip_tags(v);
            }
        },
        _ => {},
    }
}
