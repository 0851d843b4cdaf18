use super::line::LineReader;
use crate::error::Result;
use crate::model::{Column, Record};

/// Iterates over the rows of a sadf -d export, yielding one `Record` per
/// data row.
///
/// A row whose first field is non-empty and begins with `#` declares the
/// column names for the data rows that follow; it yields nothing itself.
/// Data rows are zipped positionally against the most recent header,
/// truncating at the shorter side, so a data row arriving before any header
/// yields an empty record.
pub struct RecordReader {
    lines: Box<dyn LineReader>,
    header: Vec<Option<Column>>,
    line_no: usize,
}

impl RecordReader {
    pub fn new(lines: Box<dyn LineReader>) -> Self {
        Self {
            lines,
            header: Vec::new(),
            line_no: 0,
        }
    }
}

impl std::iter::Iterator for RecordReader {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut buf = Vec::new();
            match self.lines.read(&mut buf) {
                Ok(0) => return None, // EOF
                Ok(_) => (),
                Err(e) => return Some(Err(("input reader failed", e).into())),
            }
            self.line_no += 1;

            let line = match String::from_utf8(buf) {
                Ok(line) => line,
                Err(e) => {
                    return Some(Err(
                        (format!("couldn't decode line {}", self.line_no), e).into()
                    ))
                }
            };
            let row = line.trim_end_matches(|c| c == '\n' || c == '\r');

            let fields: Vec<&str> = row.split(';').collect();

            if let Some(first) = fields[0].strip_prefix('#') {
                // Header row: "# hostname" carries the first column name.
                let first = first.strip_prefix(' ').unwrap_or(first);
                self.header = std::iter::once(first)
                    .chain(fields[1..].iter().copied())
                    .map(Column::from_name)
                    .collect();
                continue;
            }

            return Some(Ok(self
                .header
                .iter()
                .copied()
                .zip(fields)
                .filter_map(|(column, value)| column.map(|column| (column, value.to_string())))
                .collect()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::line::DelimReader;
    use super::*;

    fn read_all(input: &'static str) -> Result<Vec<Record>> {
        RecordReader::new(Box::new(DelimReader::new(input.as_bytes()))).collect()
    }

    #[test]
    fn test_header_binds_data_rows() -> std::result::Result<(), String> {
        let records = read_all(
            "# hostname;interval;timestamp;INTR;intr/s\n\
             host1;60;2021-01-01 00:00:00 UTC;-1;42.00\n",
        )?;

        assert_eq!(1, records.len());
        assert_eq!("host1", records[0].get(Column::Hostname)?);
        assert_eq!("2021-01-01 00:00:00 UTC", records[0].get(Column::Timestamp)?);
        assert_eq!("-1", records[0].get(Column::Intr)?);
        assert_eq!("42.00", records[0].get(Column::IntrRate)?);
        Ok(())
    }

    #[test]
    fn test_header_replacement() -> std::result::Result<(), String> {
        let records = read_all(
            "# hostname;interval;timestamp;kbswpfree;kbswpused\n\
             host1;60;2021-01-01 00:00:00 UTC;2048;0\n\
             # hostname;interval;timestamp;runq-sz;plist-sz\n\
             host1;60;2021-01-01 00:00:00 UTC;1;220\n",
        )?;

        assert_eq!(2, records.len());
        assert!(records[0].contains(Column::SwapFree));
        assert!(!records[0].contains(Column::RunQueueSize));
        assert!(records[1].contains(Column::RunQueueSize));
        assert!(!records[1].contains(Column::SwapFree));
        Ok(())
    }

    #[test]
    fn test_zip_truncates_at_shorter_side() -> std::result::Result<(), String> {
        let records = read_all(
            "# hostname;interval;timestamp;INTR;intr/s\n\
             host1;60\n\
             host1;60;2021-01-01 00:00:00 UTC;-1;42.00;extra;fields\n",
        )?;

        assert_eq!(2, records.len());
        assert!(records[0].contains(Column::Hostname));
        assert!(!records[0].contains(Column::Timestamp));
        assert!(!records[0].contains(Column::Intr));
        assert_eq!("42.00", records[1].get(Column::IntrRate)?);
        Ok(())
    }

    #[test]
    fn test_data_row_before_any_header() -> std::result::Result<(), String> {
        let records = read_all("host1;60;2021-01-01 00:00:00 UTC;-1;42.00\n")?;

        assert_eq!(1, records.len());
        assert!(!records[0].contains(Column::Hostname));
        assert!(!records[0].contains(Column::Intr));
        Ok(())
    }

    #[test]
    fn test_unknown_columns_are_dropped() -> std::result::Result<(), String> {
        let records = read_all(
            "# hostname;interval;timestamp;kbmemfree;kbactive\n\
             host1;60;2021-01-01 00:00:00 UTC;1000;900\n",
        )?;

        assert_eq!(1, records.len());
        assert_eq!("1000", records[0].get(Column::MemFree)?);
        assert!(records[0].contains(Column::Interval));
        Ok(())
    }

    #[test]
    fn test_marker_without_space() -> std::result::Result<(), String> {
        let records = read_all(
            "#hostname;timestamp;ldavg-15\n\
             host1;2021-01-01 00:00:00 UTC;0.30\n",
        )?;

        assert_eq!(1, records.len());
        assert_eq!("host1", records[0].get(Column::Hostname)?);
        assert_eq!("0.30", records[0].get(Column::LoadAvg15)?);
        Ok(())
    }

    #[test]
    fn test_crlf_line_endings() -> std::result::Result<(), String> {
        let records = read_all(
            "# hostname;timestamp;ldavg-15\r\n\
             host1;2021-01-01 00:00:00 UTC;0.30\r\n",
        )?;

        assert_eq!(1, records.len());
        assert_eq!("0.30", records[0].get(Column::LoadAvg15)?);
        Ok(())
    }

    #[test]
    fn test_last_row_without_newline() -> std::result::Result<(), String> {
        let records = read_all(
            "# hostname;timestamp;ldavg-15\n\
             host1;2021-01-01 00:00:00 UTC;0.30",
        )?;

        assert_eq!(1, records.len());
        assert_eq!("0.30", records[0].get(Column::LoadAvg15)?);
        Ok(())
    }
}
