//! Diagnostic lines over defmt RTT.

use defmt::info;
use thermo_gauge::diagnostics::DiagnosticSink;

/// Forwards every diagnostic line to the RTT log at info level.
pub struct DefmtSink;

impl DiagnosticSink for DefmtSink {
    fn write_line(
        &mut self,
        line: &str,
    ) {
        info!("{=str}", line);
    }
}
