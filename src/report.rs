use derive_getters::Getters;
use derive_new::new;
use std::fmt;
use std::path::PathBuf;

#[derive(new, Getters, Debug, Clone, PartialEq, Eq)]
/// Outcome of a successful update
pub struct UpdateReport {
    /// Number of members whose `foto` was rewritten
    updated: usize,
    /// The file that was replaced
    path: PathBuf,
}

impl fmt::Display for UpdateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Update foto berhasil! Total {} foto mahasiswa diperbarui.",
            self.updated
        )
    }
}
