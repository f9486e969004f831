use serde::Serialize;

/// Monday..Friday. Weekend days have no variant, so a timesheet row can never
/// carry a Saturday or a Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Workday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Workday {
    /// Zero-based index, 0 = Monday.
    pub fn index(&self) -> usize {
        match self {
            Workday::Monday => 0,
            Workday::Tuesday => 1,
            Workday::Wednesday => 2,
            Workday::Thursday => 3,
            Workday::Friday => 4,
        }
    }

    /// Map a Monday-first weekday index (0..=6) to a workday.
    /// Returns `None` for Saturday (5), Sunday (6) and anything out of range.
    pub fn from_index(idx: usize) -> Option<Self> {
        match idx {
            0 => Some(Workday::Monday),
            1 => Some(Workday::Tuesday),
            2 => Some(Workday::Wednesday),
            3 => Some(Workday::Thursday),
            4 => Some(Workday::Friday),
            _ => None,
        }
    }
}
