use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

use structopt::StructOpt;

use sar2influx::cliopt::CliOpt;
use sar2influx::convert::Converter;
use sar2influx::error::{Error, Result};
use sar2influx::input::{DelimReader, RecordReader};
use sar2influx::output::{LineProtocolEncoder, LineWriter, Output};
use sar2influx::runner::Runner;

fn main() {
    let opt = CliOpt::from_args();

    if let Err(err) = convert(&opt) {
        eprintln!("error: {}", err);
        usage();
    }
}

fn convert(opt: &CliOpt) -> Result<()> {
    let file = File::open(&opt.file).map_err(|e| -> Error {
        if e.kind() == io::ErrorKind::NotFound {
            format!("file {} was not found", opt.file.display()).into()
        } else {
            (format!("couldn't open file {}", opt.file.display()), e).into()
        }
    })?;

    let records = RecordReader::new(Box::new(DelimReader::new(BufReader::new(file))));

    let output = Output::new(
        Box::new(LineWriter::new(io::stdout())),
        Box::new(LineProtocolEncoder::new()),
    );

    Runner::new(records, Converter::new(opt.verbose), output).run()
}

fn usage() -> ! {
    let program = env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    eprintln!("usage: {} <file.csv>", program);
    process::exit(1);
}
