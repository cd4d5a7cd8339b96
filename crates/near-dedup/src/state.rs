/// Per-file lifecycle during a near-dedup run. Only `Emitted` is terminal;
/// every other state can still fail out (unreadable file, timeout) and
/// simply never advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    Unseen,
    Signed,
    Indexed,
    Clustered,
    Unique,
    Emitted,
}

impl FileState {
    pub fn is_terminal(self) -> bool {
        matches!(self, FileState::Emitted)
    }
}
