/// The closed set of SAR columns the converter knows how to read.
///
/// Header cells that resolve to no variant are dropped at zip time; their
/// values are unreachable anyway because no mapping table refers to them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Column {
    // Present in every sadf -d row shape.
    Hostname,
    Interval,
    Timestamp,

    // CPU utilization (sar -u -P ALL).
    Cpu,
    UserPct,
    NicePct,
    SysPct,
    IowaitPct,
    StealPct,
    IrqPct,
    SoftPct,
    GuestPct,
    IdlePct,

    // Interrupts (sar -I).
    Intr,
    IntrRate,

    // Paging (sar -B).
    PageInRate,
    PageOutRate,
    FaultRate,
    MajorFaultRate,
    PageFreeRate,
    PageScanRate,
    PageStealRate,
    VmEffPct,

    // Memory (sar -r).
    MemFree,
    MemUsed,
    MemUsedPct,
    MemBuffers,
    MemCached,
    MemCommit,
    MemCommitPct,

    // Swap (sar -S).
    SwapFree,
    SwapUsed,
    SwapUsedPct,
    SwapCached,
    SwapCachedPct,

    // Load and task queues (sar -q).
    RunQueueSize,
    ProcessListSize,
    LoadAvg1,
    LoadAvg5,
    LoadAvg15,

    // Block devices (sar -d).
    Dev,
    Tps,
    ReadRate,
    WriteRate,
    AvgRequestSize,
    AvgQueueSize,
    Await,
    ServiceTime,
    UtilPct,
}

impl Column {
    pub fn from_name(name: &str) -> Option<Column> {
        let column = match name {
            "hostname" => Column::Hostname,
            "interval" => Column::Interval,
            "timestamp" => Column::Timestamp,
            "CPU" => Column::Cpu,
            "%usr" => Column::UserPct,
            "%nice" => Column::NicePct,
            "%sys" => Column::SysPct,
            "%iowait" => Column::IowaitPct,
            "%steal" => Column::StealPct,
            "%irq" => Column::IrqPct,
            "%soft" => Column::SoftPct,
            "%guest" => Column::GuestPct,
            "%idle" => Column::IdlePct,
            "INTR" => Column::Intr,
            "intr/s" => Column::IntrRate,
            "pgpgin/s" => Column::PageInRate,
            "pgpgout/s" => Column::PageOutRate,
            "fault/s" => Column::FaultRate,
            "majflt/s" => Column::MajorFaultRate,
            "pgfree/s" => Column::PageFreeRate,
            "pgscank/s" => Column::PageScanRate,
            "pgsteal/s" => Column::PageStealRate,
            "%vmeff" => Column::VmEffPct,
            "kbmemfree" => Column::MemFree,
            "kbmemused" => Column::MemUsed,
            "%memused" => Column::MemUsedPct,
            "kbbuffers" => Column::MemBuffers,
            "kbcached" => Column::MemCached,
            "kbcommit" => Column::MemCommit,
            "%commit" => Column::MemCommitPct,
            "kbswpfree" => Column::SwapFree,
            "kbswpused" => Column::SwapUsed,
            "%swpused" => Column::SwapUsedPct,
            "kbswpcad" => Column::SwapCached,
            "%swpcad" => Column::SwapCachedPct,
            "runq-sz" => Column::RunQueueSize,
            "plist-sz" => Column::ProcessListSize,
            "ldavg-1" => Column::LoadAvg1,
            "ldavg-5" => Column::LoadAvg5,
            "ldavg-15" => Column::LoadAvg15,
            "DEV" => Column::Dev,
            "tps" => Column::Tps,
            "rd_sec/s" => Column::ReadRate,
            "wr_sec/s" => Column::WriteRate,
            "avgrq-sz" => Column::AvgRequestSize,
            "avgqu-sz" => Column::AvgQueueSize,
            "await" => Column::Await,
            "svctm" => Column::ServiceTime,
            "%util" => Column::UtilPct,
            _ => return None,
        };
        Some(column)
    }

    /// The column name as it appears in a sadf header row.
    pub fn name(self) -> &'static str {
        match self {
            Column::Hostname => "hostname",
            Column::Interval => "interval",
            Column::Timestamp => "timestamp",
            Column::Cpu => "CPU",
            Column::UserPct => "%usr",
            Column::NicePct => "%nice",
            Column::SysPct => "%sys",
            Column::IowaitPct => "%iowait",
            Column::StealPct => "%steal",
            Column::IrqPct => "%irq",
            Column::SoftPct => "%soft",
            Column::GuestPct => "%guest",
            Column::IdlePct => "%idle",
            Column::Intr => "INTR",
            Column::IntrRate => "intr/s",
            Column::PageInRate => "pgpgin/s",
            Column::PageOutRate => "pgpgout/s",
            Column::FaultRate => "fault/s",
            Column::MajorFaultRate => "majflt/s",
            Column::PageFreeRate => "pgfree/s",
            Column::PageScanRate => "pgscank/s",
            Column::PageStealRate => "pgsteal/s",
            Column::VmEffPct => "%vmeff",
            Column::MemFree => "kbmemfree",
            Column::MemUsed => "kbmemused",
            Column::MemUsedPct => "%memused",
            Column::MemBuffers => "kbbuffers",
            Column::MemCached => "kbcached",
            Column::MemCommit => "kbcommit",
            Column::MemCommitPct => "%commit",
            Column::SwapFree => "kbswpfree",
            Column::SwapUsed => "kbswpused",
            Column::SwapUsedPct => "%swpused",
            Column::SwapCached => "kbswpcad",
            Column::SwapCachedPct => "%swpcad",
            Column::RunQueueSize => "runq-sz",
            Column::ProcessListSize => "plist-sz",
            Column::LoadAvg1 => "ldavg-1",
            Column::LoadAvg5 => "ldavg-5",
            Column::LoadAvg15 => "ldavg-15",
            Column::Dev => "DEV",
            Column::Tps => "tps",
            Column::ReadRate => "rd_sec/s",
            Column::WriteRate => "wr_sec/s",
            Column::AvgRequestSize => "avgrq-sz",
            Column::AvgQueueSize => "avgqu-sz",
            Column::Await => "await",
            Column::ServiceTime => "svctm",
            Column::UtilPct => "%util",
        }
    }
}
