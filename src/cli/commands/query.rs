//! Query command: stream JSON records, optionally through jq.

use std::io::Write;
use std::process::{Command, Stdio};

use ticket_lib::{Result, TicketError, TicketStore, query};

/// Execute the query command.
///
/// Records go to stdout directly, or through `jq -c "select(<filter>)"`
/// when a filter expression is given: every record is written to the
/// filter's stdin, the pipe is closed, and the exit status is awaited
/// synchronously.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the filter process
/// cannot be spawned or exits nonzero.
pub fn execute(filter: Option<&str>) -> Result<()> {
    let store = TicketStore::default_location();
    let records = query::collect_records(&store)?;

    let Some(filter) = filter else {
        for record in &records {
            println!("{record}");
        }
        return Ok(());
    };

    let mut child = Command::new("jq")
        .arg("-c")
        .arg(format!("select({filter})"))
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|_| TicketError::Subprocess {
            name: "jq".to_string(),
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        for record in &records {
            writeln!(stdin, "{record}")?;
        }
        // Dropping the handle closes the pipe before the wait.
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(TicketError::Subprocess {
            name: "jq".to_string(),
        });
    }
    Ok(())
}
