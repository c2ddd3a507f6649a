use crate::Identity;

/// Result of loading the session - distinguishes "nothing stored" from a
/// record that was discarded.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub identity: Option<Identity>,
    /// Present if a record existed but was corrupt or incomplete (and has been cleared)
    pub discarded: Option<String>,
}
