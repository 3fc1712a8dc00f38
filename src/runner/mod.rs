//! Process runner subsystem.
//!
//! # Data Flow
//! ```text
//! download handler
//!     → DownloadRunner::run(url)
//!     → child process (yt-dlp <url>)
//!     → captured stdout/stderr + exit status
//!     → ProcessOutcome back to the handler
//! ```
//!
//! # Design Decisions
//! - The runner is a trait so handlers can be exercised against stubs
//! - A nonzero exit is an outcome, not an error: the child ran and its
//!   stderr is the diagnostic payload
//! - No retries, no timeout on the child, no cap on concurrent children

pub mod process;
pub mod ytdlp;

pub use process::{DownloadRunner, ProcessOutcome, RunnerError};
pub use ytdlp::YtDlpRunner;
