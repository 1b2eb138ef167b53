use crate::error::CheckError;

use log::error;
use nagiosplugin::ServiceState;
use std::io::Write;

/// Final result of one invocation
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub state: ServiceState,
    pub message: Option<String>,
}

impl CheckOutcome {
    pub fn ok() -> Self {
        CheckOutcome {
            state: ServiceState::Ok,
            message: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        CheckOutcome {
            state: ServiceState::Warning,
            message: Some(message.into()),
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        CheckOutcome {
            state: ServiceState::Critical,
            message: Some(message.into()),
        }
    }

    /// Write the diagnostic line, if any
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if let Some(ref message) = self.message {
            writeln!(out, "{}: {}", self.state, message)?;
        }
        Ok(())
    }

    /// Print the diagnostic line and exit with the state exit code
    pub fn print_and_exit(self) -> ! {
        let stdout = std::io::stdout();
        if let Err(err) = self.write_to(&mut stdout.lock()) {
            error!("Failed to write check result: {}", err);
        }
        std::process::exit(self.state.exit_code());
    }
}

impl From<CheckError> for CheckOutcome {
    fn from(err: CheckError) -> Self {
        CheckOutcome::critical(err.to_string())
    }
}
