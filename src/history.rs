use crate::die::DieType;

/// Formats a history line, e.g. `Rolled 3d4: 1+4+2 = 7\n`.
pub fn format_log_line(die: DieType, count: u32, rolls: &[u32], total: u64) -> String {
    let joined = rolls
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("+");

    format!("Rolled {count}{die}: {joined} = {total}\n")
}

/// Append-only roll history for the session.
#[derive(Debug, Clone, Default)]
pub struct RollLog {
    entries: Vec<String>,
}

impl RollLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, line: String) {
        self.entries.push(line);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The newest entry, the one the log view scrolls to.
    pub fn latest(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The whole history as it would appear in the log pane.
    pub fn text(&self) -> String {
        self.entries.concat()
    }
}
