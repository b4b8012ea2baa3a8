//! Lowering of a loaded `DungeonDef` into the C declarations and definitions.

use dungeon_data::{DungeonDef, Entries, LocationDef, ObituaryDef, ObjectDescriptionDef};
use log::debug;

use crate::escape::{NULL, c_escape, c_string_or_null, quote_wrap};

/// Simple message tables, in emission order.
pub const MESSAGE_TABLES: [&str; 3] = ["arbitrary_messages", "class_messages", "turn_threshold_messages"];

const HEADER_TYPES: &str = r"#include <stdio.h>

typedef struct {
  const char* inventory;
  const char** longs;
} object_description_t;

typedef struct {
  const char* small;
  const char* big;
} descriptions_t;

typedef struct {
  descriptions_t description;
} location_t;

typedef struct {
  const char* query;
  const char* yes_response;
} obituary_t;

";

const HEADER_EXTERNS: &str = r"extern location_t locations[];
extern object_description_t object_descriptions[];
extern const char* arbitrary_messages[];
extern const char* class_messages[];
extern const char* turn_threshold_messages[];
extern obituary_t obituaries[];

extern size_t CLSSES;
extern int maximum_deaths;
";

/// The two generated artifacts, held in memory until written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTables {
    /// Declarations artifact (`newdb.h`).
    pub header: String,
    /// Definitions artifact (`newdb.c`).
    pub source: String,
}

/// Generate both artifacts for `dungeon`.
///
/// `header_name` is the file name the definitions artifact `#include`s.
/// The dungeon is only read; nothing here touches the filesystem.
pub fn generate(dungeon: &DungeonDef, header_name: &str) -> GeneratedTables {
    let mut tables = TableWriter::new(header_name);

    let messages = [
        &dungeon.arbitrary_messages,
        &dungeon.class_messages,
        &dungeon.turn_threshold_messages,
    ];
    for (name, entries) in MESSAGE_TABLES.into_iter().zip(messages) {
        tables.messages(name, entries);
    }
    tables.locations(&dungeon.locations);
    tables.object_descriptions(&dungeon.object_descriptions);
    tables.obituaries(&dungeon.obituaries);
    tables.counts(dungeon.class_count(), dungeon.maximum_deaths());

    tables.finish()
}

/// Accumulates header and source text in lockstep.
struct TableWriter {
    header: String,
    source: String,
}

impl TableWriter {
    fn new(header_name: &str) -> Self {
        Self {
            header: HEADER_TYPES.to_string(),
            source: format!("#include \"{header_name}\"\n\n"),
        }
    }

    fn enum_refs<T>(&mut self, name: &str, entries: &Entries<T>) {
        self.header.push_str(&format!("enum {name}_refs {{\n"));
        for id in entries.ids() {
            self.header.push_str(&format!("  {id},\n"));
        }
        self.header.push_str("};\n\n");
    }

    fn messages(&mut self, name: &str, entries: &Entries<String>) {
        debug!("emitting {} entries for {name}", entries.len());
        self.enum_refs(name, entries);

        self.source.push_str(&format!("const char* {name}[] = {{\n"));
        for entry in entries {
            self.source
                .push_str(&format!("  {},\n", c_string_or_null(entry.value.as_deref())));
        }
        self.source.push_str("};\n\n");
    }

    fn locations(&mut self, locations: &Entries<LocationDef>) {
        debug!("emitting {} locations", locations.len());
        self.enum_refs("locations", locations);

        self.source.push_str("location_t locations[] = {\n");
        for entry in locations {
            let description = entry.value.as_ref().and_then(|loc| loc.description.as_ref());
            let short = c_string_or_null(description.and_then(|d| d.short.as_deref()));
            let long = c_string_or_null(description.and_then(|d| d.long.as_deref()));
            self.source.push_str(&format!(
                "  {{\n    .description = {{\n      .small = {short},\n      .big = {long},\n    }},\n  }},\n"
            ));
        }
        self.source.push_str("};\n\n");
    }

    fn object_descriptions(&mut self, objects: &Entries<ObjectDescriptionDef>) {
        debug!("emitting {} object descriptions", objects.len());
        self.enum_refs("object_descriptions", objects);

        self.source.push_str("object_description_t object_descriptions[] = {\n");
        for entry in objects {
            let object = entry.value.as_ref();
            let inventory = c_string_or_null(object.and_then(|o| o.inventory.as_deref()));
            self.source.push_str("  {\n");
            self.source.push_str(&format!("    .inventory = {inventory},\n"));
            match object.and_then(|o| o.longs.as_deref()) {
                // an empty list is emitted exactly like a missing one
                Some(longs) if !longs.is_empty() => {
                    self.source.push_str("    .longs = (const char* []) {\n");
                    for long in longs {
                        self.source.push_str(&format!("      {},\n", quote_wrap(&c_escape(long))));
                    }
                    self.source.push_str("    },\n");
                },
                _ => self.source.push_str(&format!("    .longs = {NULL},\n")),
            }
            self.source.push_str("  },\n");
        }
        self.source.push_str("};\n\n");
    }

    fn obituaries(&mut self, obituaries: &[ObituaryDef]) {
        debug!("emitting {} obituaries", obituaries.len());
        self.source.push_str("obituary_t obituaries[] = {\n");
        for obit in obituaries {
            let query = quote_wrap(&c_escape(&obit.query));
            let yes_response = quote_wrap(&c_escape(&obit.yes_response));
            self.source.push_str(&format!(
                "  {{\n    .query = {query},\n    .yes_response = {yes_response},\n  }},\n"
            ));
        }
        self.source.push_str("};\n");
    }

    fn counts(&mut self, classes: usize, maximum_deaths: usize) {
        self.source.push_str(&format!("\nsize_t CLSSES = {classes};\n"));
        self.source.push_str(&format!("\nint maximum_deaths = {maximum_deaths};\n"));
    }

    fn finish(mut self) -> GeneratedTables {
        self.header.push_str(HEADER_EXTERNS);
        GeneratedTables {
            header: self.header,
            source: self.source,
        }
    }
}
