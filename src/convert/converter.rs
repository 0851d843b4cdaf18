use std::collections::HashMap;

use super::Family;
use crate::error::Result;
use crate::model::{parse_timestamp, Column, MetricName, MetricPoint, Record, Tags};

// Field tables bind input columns to output metric names; points are emitted
// in table order.

#[rustfmt::skip]
const CPU_FIELDS: &[(Column, MetricName)] = &[
    (Column::UserPct,   "cpu_user"),
    (Column::NicePct,   "cpu_nice"),
    (Column::SysPct,    "cpu_sys"),
    (Column::IowaitPct, "cpu_iowait"),
    (Column::StealPct,  "cpu_steal"),
    (Column::IrqPct,    "cpu_irq"),
    (Column::SoftPct,   "cpu_soft"),
    (Column::GuestPct,  "cpu_guest"),
    (Column::IdlePct,   "cpu_idle"),
];

#[rustfmt::skip]
const PAGING_FIELDS: &[(Column, MetricName)] = &[
    (Column::PageInRate,     "page_in"),
    (Column::PageOutRate,    "page_out"),
    (Column::FaultRate,      "fault"),
    (Column::MajorFaultRate, "major_fault"),
    (Column::PageFreeRate,   "page_free"),
    (Column::PageScanRate,   "page_scan"),
    (Column::PageStealRate,  "page_steal"),
    (Column::VmEffPct,       "page_vm_eff"),
];

#[rustfmt::skip]
const MEMORY_FIELDS: &[(Column, MetricName)] = &[
    (Column::MemFree,      "memory_free"),
    (Column::MemUsed,      "memory_used"),
    (Column::MemUsedPct,   "memory_used_pc"),
    (Column::MemBuffers,   "memory_buffers"),
    (Column::MemCached,    "memory_cached"),
    (Column::MemCommit,    "memory_commit"),
    (Column::MemCommitPct, "memory_commit_pc"),
];

#[rustfmt::skip]
const SWAP_FIELDS: &[(Column, MetricName)] = &[
    (Column::SwapFree,      "swap_free"),
    (Column::SwapUsed,      "swap_used"),
    (Column::SwapUsedPct,   "swap_used_pc"),
    (Column::SwapCached,    "swap_cached"),
    (Column::SwapCachedPct, "swap_cached_pc"),
];

#[rustfmt::skip]
const LOAD_FIELDS: &[(Column, MetricName)] = &[
    (Column::RunQueueSize,    "runq_size"),
    (Column::ProcessListSize, "process_list_size"),
    (Column::LoadAvg1,        "load_avg1"),
    (Column::LoadAvg5,        "load_avg5"),
    (Column::LoadAvg15,       "load_avg15"),
];

#[rustfmt::skip]
const DISK_FIELDS: &[(Column, MetricName)] = &[
    (Column::Tps,            "disk_tps"),
    (Column::ReadRate,       "disk_read"),
    (Column::WriteRate,      "disk_write"),
    (Column::AvgRequestSize, "disk_req_size_avg"),
    (Column::AvgQueueSize,   "disk_queue_size_avg"),
    (Column::Await,          "disk_await"),
    (Column::ServiceTime,    "disk_service_time"),
    (Column::UtilPct,        "disk_usage"),
];

/// Turns classified records into batches of metric points.
///
/// The converter owns the interrupt suppression state, so all records of a
/// file must flow through a single instance, in file order.
pub struct Converter {
    intr_cache: HashMap<String, Record>,
    verbose: bool,
}

impl Converter {
    pub fn new(verbose: bool) -> Self {
        Self {
            intr_cache: HashMap::new(),
            verbose,
        }
    }

    pub fn convert(&mut self, record: Record) -> Result<Vec<MetricPoint>> {
        match Family::classify(&record) {
            Some(Family::Cpu) => convert_cpu(&record),
            Some(Family::Interrupt) => self.convert_interrupt(record),
            Some(Family::Paging) => emit_fields(&record, PAGING_FIELDS, Vec::new()),
            Some(Family::Memory) => emit_fields(&record, MEMORY_FIELDS, Vec::new()),
            Some(Family::Swap) => emit_fields(&record, SWAP_FIELDS, Vec::new()),
            Some(Family::Load) => emit_fields(&record, LOAD_FIELDS, Vec::new()),
            Some(Family::Disk) => convert_disk(&record),
            None => {
                if self.verbose {
                    eprintln!("no metric family matches record: {:?}", record);
                }
                Ok(Vec::new())
            }
        }
    }

    /// Idle interrupts would flood the output with zero samples, so a zero
    /// reading is only ever emitted as the leading edge right before the
    /// counter becomes active again.
    fn convert_interrupt(&mut self, record: Record) -> Result<Vec<MetricPoint>> {
        let interrupt = match record.get(Column::Intr)? {
            "-1" => "ALL".to_string(),
            id => id.to_string(),
        };
        let value = record.get(Column::IntrRate)?.to_string();

        let mut points = Vec::new();
        if parse_rate(&value)? > 0.0 {
            if let Some(stale) = self.intr_cache.get(&interrupt) {
                let stale_value = stale.get(Column::IntrRate)?.to_string();
                if parse_rate(&stale_value)? == 0.0 {
                    points.push(emit(
                        stale,
                        "interrupt",
                        stale_value,
                        vec![("interrupt", interrupt.clone())],
                    )?);
                }
            }
            points.push(emit(
                &record,
                "interrupt",
                value,
                vec![("interrupt", interrupt.clone())],
            )?);
        }
        self.intr_cache.insert(interrupt, record);

        Ok(points)
    }
}

fn convert_cpu(record: &Record) -> Result<Vec<MetricPoint>> {
    let cpu = match record.get(Column::Cpu)? {
        "-1" => "ALL".to_string(),
        core => core.to_string(),
    };
    emit_fields(record, CPU_FIELDS, vec![("cpu", cpu)])
}

fn convert_disk(record: &Record) -> Result<Vec<MetricPoint>> {
    let dev = record.get(Column::Dev)?.to_string();
    emit_fields(record, DISK_FIELDS, vec![("disk", dev)])
}

fn emit_fields(
    record: &Record,
    fields: &[(Column, MetricName)],
    tags: Tags,
) -> Result<Vec<MetricPoint>> {
    fields
        .iter()
        .map(|&(column, name)| {
            let value = record.get(column)?.to_string();
            emit(record, name, value, tags.clone())
        })
        .collect()
}

fn emit(record: &Record, name: MetricName, value: String, mut tags: Tags) -> Result<MetricPoint> {
    tags.push(("hostname", record.get(Column::Hostname)?.to_string()));
    let timestamp = parse_timestamp(record.get(Column::Timestamp)?)?;
    Ok(MetricPoint::new(name, tags, value, timestamp))
}

fn parse_rate(value: &str) -> Result<f64> {
    value
        .parse()
        .map_err(|e| (format!("couldn't parse interrupt rate {:?}", value), e).into())
}
