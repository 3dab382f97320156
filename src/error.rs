use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop an update before the file is replaced
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl UpdateError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// The document was parsed but does not have the shape of a member list
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("the document root is not a JSON object")]
    NotAnObject,
    #[error("the document has no `membersList` key")]
    MissingMembersList,
    #[error("`membersList` is not an array")]
    MembersListNotArray,
    #[error("member #{index} is not a JSON object")]
    MemberNotObject { index: usize },
    #[error("member #{index} has no `nim`")]
    MissingNim { index: usize },
    #[error("the `nim` of member #{index} is neither a string nor a number")]
    InvalidNim { index: usize },
}
