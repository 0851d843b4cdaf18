use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "sar2influx", about = "sar2influx command line arguments")]
pub struct CliOpt {
    /// SAR CSV export produced by `sadf -d`.
    #[structopt(name = "file.csv", parse(from_os_str))]
    pub file: PathBuf,

    /// Report records that match no metric family on stderr.
    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,
}
