use crate::model::{Column, Record};

/// The metric family a record belongs to, decided by which columns are
/// present.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Family {
    Cpu,
    Interrupt,
    Paging,
    Memory,
    Swap,
    Load,
    Disk,
}

impl Family {
    /// Classifies a record by a fixed, ordered set of presence checks; the
    /// first match wins, so the families stay mutually exclusive even for
    /// column sets that would satisfy several checks.
    pub fn classify(record: &Record) -> Option<Family> {
        if record.contains(Column::Cpu) && record.contains(Column::UserPct) {
            Some(Family::Cpu)
        } else if record.contains(Column::Intr) {
            Some(Family::Interrupt)
        } else if record.contains(Column::PageInRate) {
            Some(Family::Paging)
        } else if record.contains(Column::MemFree) {
            Some(Family::Memory)
        } else if record.contains(Column::SwapFree) {
            Some(Family::Swap)
        } else if record.contains(Column::LoadAvg15) {
            Some(Family::Load)
        } else if record.contains(Column::Dev) && record.contains(Column::ReadRate) {
            Some(Family::Disk)
        } else {
            None
        }
    }
}
