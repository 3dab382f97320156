use std::path::{Path, PathBuf};

/// Location of the member list, relative to the working directory
pub const MEMBERS_FILE: [&str; 3] = ["src", "data", "members.json"];
/// The photo host of the university, the `nim` is put right after it
pub const PHOTO_URL_PREFIX: &str = "https://siakadu.unesa.ac.id/photo/fotomhs/";
pub const PHOTO_URL_SUFFIX: &str = ".jpg";

/// Configuration of the update, only the directory from which the data file is resolved
/// changes between runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the JSON document holding the `membersList`
    pub data_path: PathBuf,
}

impl Config {
    pub fn new(working_directory: &Path) -> Self {
        let data_path = MEMBERS_FILE
            .iter()
            .fold(working_directory.to_path_buf(), |path, segment| {
                path.join(segment)
            });
        Self { data_path }
    }
}
