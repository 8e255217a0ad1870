use derive_new::new;

/// Resolution override for a single two-way diff item.
///
/// `Default` means no override: the merge falls back to the configured
/// default action. The other variants pick one side outright and win over
/// any bulk default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreferredActionTwoWay {
    #[default]
    Default,
    ApplyLocal,
    ApplyRemote,
}

/// One edit operation between a base line sequence and an other sequence.
///
/// An item always represents a real change: `base_affected_lines` and
/// `other_affected_lines` are never both zero. Items in a diff are sorted by
/// `base_line_start` and never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DiffItem {
    /// 0-based line index in the base file where the change begins.
    pub base_line_start: usize,
    /// 0-based line index in the other file where the change begins.
    pub other_line_start: usize,
    /// Lines deleted from the base file.
    pub base_affected_lines: usize,
    /// Lines inserted into the other file.
    pub other_affected_lines: usize,
    #[new(default)]
    pub preferred_action: PreferredActionTwoWay,
}

impl DiffItem {
    /// First base line past the affected range.
    pub fn base_line_end(&self) -> usize {
        self.base_line_start + self.base_affected_lines
    }
}
