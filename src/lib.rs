//! # cf-reader
//!
//! A reader for paged configuration containers.
//!
//! A container is a paged binary store of named rows. Row bodies are
//! DEFLATE-compressed at the top level and may themselves be nested
//! containers. Decoding produces a [`Directory`] of payloads and
//! sub-directories; payloads holding structural text can be indexed with
//! [`StructuralIndex`] and queried by position.
//!
//! ```no_run
//! # use cf_reader::{Directory, StructuralIndex};
//! let directory = Directory::open_file("object.cf").unwrap();
//! let root = directory.payload("root").unwrap().as_text();
//! let index = StructuralIndex::build(&root).unwrap();
//! println!("{}", index.read(&[2]).unwrap());
//! ```
pub mod cf;

// Re-export the main types for convenience
pub use cf::{
    build_structural_index,
    open_container,
    Container,
    Directory,
    Entry,
    Payload,
    StructuralIndex,
    CfError,
    Result,
    types::{
        models::{
            ContainerMode,
            Element,
            ElementKind,
            PageHeader,
            Row,
            RowMetadata,
            RowPointer,
            END_OF_CHAIN,
            NESTED_CONTAINER_MARKER,
            UTF8_BOM,
        },
        options::DecodeOptions,
    },
};
