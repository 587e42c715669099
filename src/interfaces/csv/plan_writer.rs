use crate::domain::plan::AllocationPlan;
use crate::error::Result;
use std::io::Write;

/// Writes an allocation plan as CSV
/// (`debt_id,balance_before,amount_applied,balance_after`), one row per
/// queued debt, zero-applied rows included for preview visibility.
pub struct PlanWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PlanWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_plan(&mut self, plan: &AllocationPlan) -> Result<()> {
        for line in &plan.lines {
            self.writer.serialize(line)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::allocator::allocate;
    use crate::domain::debt::{Amount, Debt};
    use crate::domain::request::AllocationRequest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plan_csv_output() {
        let request = AllocationRequest::sequential(
            Amount::new(dec!(120)).unwrap(),
            vec![Debt::new(1, dec!(100)), Debt::new(2, dec!(50))],
        );
        let plan = allocate(&request).unwrap();

        let mut buffer = Vec::new();
        PlanWriter::new(&mut buffer).write_plan(&plan).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next().unwrap(),
            "debt_id,balance_before,amount_applied,balance_after"
        );
        assert_eq!(lines.next().unwrap(), "1,100,100,0");
        assert_eq!(lines.next().unwrap(), "2,50,20,30");
    }
}
