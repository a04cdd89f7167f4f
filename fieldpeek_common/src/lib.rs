//! Code shared between the `fieldpeek` command-line tool and its tests.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub use serde_json;
pub use tracing;

pub mod inspector;
pub mod kind;
pub mod tracing_support;

/// Common imports used by many modules.
pub mod prelude {
    pub use std::{
        fmt,
        fs::File,
        io::{Read, Write},
        path::{Path, PathBuf},
    };

    pub use anyhow::{format_err, Context};
    pub use serde_json::{Map, Value};
    pub use tracing::{
        debug, debug_span, error, info, instrument, trace, trace_span, warn,
    };

    pub use super::{
        inspector::{FieldListing, Inspection},
        kind::ValueKind,
        Error, Result,
    };
}

/// Error type for this crate's functions.
pub use anyhow::Error;
/// Result type for this crate's functions.
pub use anyhow::Result;
