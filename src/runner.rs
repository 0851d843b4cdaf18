use crate::convert::Converter;
use crate::error::Result;
use crate::input::RecordReader;
use crate::output::Output;

// (RecordReader -> Converter) -> (Encoder -> Writer)
//        producer                     consumer
//
// RecordReader == CSV lines      ->  Iterator<Result<Record>>
// Converter    == Record         ->  Vec<MetricPoint>
// Encoder      == MetricPoint    ->  line protocol bytes
// Writer       == bytes          ->  stdout
pub struct Runner {
    records: RecordReader,
    converter: Converter,
    output: Output,
}

impl Runner {
    pub fn new(records: RecordReader, converter: Converter, output: Output) -> Self {
        Self {
            records,
            converter,
            output,
        }
    }

    /// Drains the input, writing every produced point. The first error
    /// aborts the run; everything written so far stays written.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let record = match self.records.next() {
                Some(Ok(record)) => record,
                Some(Err(e)) => return Err(e),
                None => break,
            };

            for point in self.converter.convert(record)? {
                self.output.write(&point)?;
            }
        }
        Ok(())
    }
}
