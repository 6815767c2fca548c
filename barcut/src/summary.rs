use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// Number of cuts of one exact size on a bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutGroup {
    pub size: f32,
    pub count: usize,
}

/// Cuts of a bar grouped by size, in order of first appearance on the bar.
/// Displays as `2x 40, 1x 20`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CutSummary {
    pub groups: Vec<CutGroup>,
}

impl CutSummary {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Display for CutSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = self
            .groups
            .iter()
            .map(|g| format!("{}x {}", g.count, g.size))
            .join(", ");
        f.write_str(&text)
    }
}

/// Groups cut sizes by exact equality, keeping the order in which each size was first seen.
pub fn summarize(cuts: &[f32]) -> CutSummary {
    let mut groups: Vec<CutGroup> = vec![];
    for &size in cuts {
        match groups.iter_mut().find(|g| g.size == size) {
            Some(group) => group.count += 1,
            None => groups.push(CutGroup { size, count: 1 }),
        }
    }
    CutSummary { groups }
}
