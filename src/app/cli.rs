use std::future::Future;
use std::io;

use tokio::io::{BufWriter, Stdout};

use super::error::AppError;

/// Reusable CLI application runner that handles:
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Stdout buffering
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM)
pub struct CliApp {
    name: String,
}

impl CliApp {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the application with the process arguments and a buffered stdout
    ///
    /// The program name is dropped from the arguments. The main function
    /// owns flushing the writer.
    ///
    /// This function never returns - it calls std::process::exit with the appropriate code
    pub async fn run<F, Fut>(self, main_fn: F) -> !
    where
        F: FnOnce(Vec<String>, BufWriter<Stdout>) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let writer = BufWriter::new(tokio::io::stdout());

        // Race main application logic against signal reception
        tokio::select! {
            result = main_fn(args, writer) => {
                match result {
                    Ok(()) => std::process::exit(0),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            signal = wait_for_signal() => {
                match signal {
                    Ok(code) => std::process::exit(code),
                    Err(e) => {
                        eprintln!("Error: {}: failed to install signal handlers: {}", self.name, e);
                        std::process::exit(1);
                    }
                }
            }
        }
    }
}

/// Wait for SIGINT, SIGTERM, SIGHUP or Ctrl+C
/// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
async fn wait_for_signal() -> io::Result<i32> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sighup = signal(SignalKind::hangup())?;

        let code = tokio::select! {
            _ = sigterm.recv() => {
                eprintln!("Received SIGTERM");
                143 // 128 + 15
            }
            _ = sigint.recv() => {
                eprintln!("Received SIGINT");
                130 // 128 + 2
            }
            _ = sighup.recv() => {
                eprintln!("Received SIGHUP");
                129 // 128 + 1
            }
        };
        Ok(code)
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        eprintln!("Received Ctrl+C");
        Ok(130)
    }
}
