//! YAML Export functionality
//!
//! Exports the session snapshot to YAML for human reading.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::SessionSnapshot;
use crate::session::Session;

/// Export the session snapshot as YAML
pub fn export_snapshot_yaml<W: Write>(session: &Session, writer: &mut W) -> BudgetResult<()> {
    let snapshot = SessionSnapshot::from_session(session)?;

    writeln!(writer, "# daybudget session snapshot")
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", snapshot.exported_at)
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &snapshot).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
