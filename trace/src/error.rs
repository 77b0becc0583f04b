use crate::recorder::EventKind;
use std::{io, path::PathBuf};

/// Trace destination can not be prepared, no [`crate::TraceDocument`] exists afterwards.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("cannot open trace file '{}': {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write trace preamble: {0}")]
    Write(#[from] io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("write trace failed: {0}")]
    Io(#[from] io::Error),
    #[error("begin {0} while previous {0} not ended")]
    UnclosedBegin(EventKind),
    #[error("end {0} without begin")]
    UnmatchedEnd(EventKind),
    #[error("char record outside of text object")]
    CharOutsideText,
}
