//! dungeon_gen: compiler from the adventure dungeon description to C tables.
//!
//! The generator reads `adventure.yaml` and produces a declarations file
//! (`newdb.h`: record typedefs, one `enum <table>_refs` per identified
//! collection, extern declarations) and a definitions file (`newdb.c`: the
//! arrays themselves plus the `CLSSES` and `maximum_deaths` counts).
//!
//! Array index N of every table corresponds to the Nth constant of its enum;
//! both follow the order of the collection in the input document.
//!
//! ```
//! use dungeon_gen::{generate, parse_dungeon};
//!
//! let dungeon = parse_dungeon(
//!     "arbitrary_messages: [{NO_MESSAGE: null}]\n\
//!      class_messages: []\nturn_threshold_messages: []\n\
//!      locations: []\nobject_descriptions: []\nobituaries: []\n",
//! )
//! .unwrap();
//! let tables = generate(&dungeon, "newdb.h");
//! assert!(tables.header.contains("enum arbitrary_messages_refs {\n  NO_MESSAGE,\n};"));
//! assert!(tables.source.contains("const char* arbitrary_messages[] = {\n  NULL,\n};"));
//! ```

mod emit;
pub mod escape;
mod loader;
mod output;
mod paths;

pub use emit::{GeneratedTables, MESSAGE_TABLES, generate};
pub use loader::{load_dungeon, parse_dungeon};
pub use output::write_tables;
pub use paths::{DEFAULT_HEADER, DEFAULT_INPUT, DEFAULT_SOURCE, OutputPaths};

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the dungeon or writing the tables.
///
/// Emission itself cannot fail: absent optional fields become `NULL`.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("unable to read '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dungeon description: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("unable to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
