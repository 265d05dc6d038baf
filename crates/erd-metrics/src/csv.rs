//! CSV export of the dispatch log.
//!
//! Rows serialize through serde, so the header line comes from
//! [`DispatchRow`](crate::DispatchRow)'s field names.

use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::error::MetricsResult;
use crate::recorder::MetricsRecorder;

impl MetricsRecorder {
    /// Write the full dispatch log (header + one row per successful
    /// dispatch) to `writer`.
    pub fn export_csv<W: Write>(&self, writer: W) -> MetricsResult<()> {
        let mut out = Writer::from_writer(writer);
        for row in self.rows() {
            out.serialize(row)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Convenience wrapper: export to a file path.
    pub fn export_csv_path(&self, path: &Path) -> MetricsResult<()> {
        let mut out = Writer::from_path(path)?;
        for row in self.rows() {
            out.serialize(row)?;
        }
        out.flush()?;
        Ok(())
    }
}
