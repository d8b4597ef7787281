//! Request and error audit log
//!
//! The original behavior is one tab-separated line per inbound request in
//! `logs/reqLog.log` and one per handled server error in `logs/errLog.log`,
//! with the log directory created on demand. Appends go through a single
//! writer task fed by a channel, so concurrent requests never interleave
//! partial lines. Write failures are reported locally and never abort the
//! request being logged.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, oneshot};
use tracing::{info, warn};
use uuid::Uuid;

const REQUEST_LOG_FILE: &str = "reqLog.log";
const ERROR_LOG_FILE: &str = "errLog.log";

/// Fields captured from an inbound request. Missing headers are recorded
/// as `-`.
#[derive(Debug, Clone)]
pub struct RequestEntry {
    pub method: String,
    pub uri: String,
    pub origin: String,
    pub remote_addr: String,
    pub platform: String,
    pub user_agent: String,
}

enum AuditEvent {
    Append { filename: &'static str, line: String },
    Flush(oneshot::Sender<()>),
}

/// Handle to the audit writer task. Cheap to clone; all clones feed the
/// same serialized writer.
#[derive(Clone)]
pub struct AuditLog {
    tx: mpsc::UnboundedSender<AuditEvent>,
}

impl AuditLog {
    /// Start the writer task for the given log directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(writer_task(dir.into(), rx));
        Self { tx }
    }

    /// Record an inbound request. Non-blocking; the line is handed to the
    /// writer task and an equivalent tracing event is emitted.
    pub fn request(&self, entry: RequestEntry) {
        info!(
            method = %entry.method,
            uri = %entry.uri,
            origin = %entry.origin,
            remote_addr = %entry.remote_addr,
            platform = %entry.platform,
            user_agent = %entry.user_agent,
            "Incoming request"
        );

        self.append(REQUEST_LOG_FILE, request_line(&entry));
    }

    /// Record a handled error with the triggering request's origin header.
    pub fn error(&self, name: &str, message: &str, origin: &str) {
        self.append(ERROR_LOG_FILE, error_line(name, message, origin));
    }

    /// Wait until every line enqueued so far has been written.
    pub async fn flush(&self) {
        let (tx, rx) = oneshot::channel();
        if self.tx.send(AuditEvent::Flush(tx)).is_ok() {
            let _ = rx.await;
        }
    }

    fn append(&self, filename: &'static str, line: String) {
        if self.tx.send(AuditEvent::Append { filename, line }).is_err() {
            warn!(filename, "Audit writer task is gone, dropping log line");
        }
    }
}

impl std::fmt::Debug for AuditLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditLog").finish_non_exhaustive()
    }
}

async fn writer_task(dir: PathBuf, mut rx: mpsc::UnboundedReceiver<AuditEvent>) {
    let mut dir_ready = false;

    while let Some(event) = rx.recv().await {
        match event {
            AuditEvent::Append { filename, line } => {
                if !dir_ready {
                    if let Err(e) = tokio::fs::create_dir_all(&dir).await {
                        warn!(dir = %dir.display(), error = %e, "Failed to create log directory");
                        continue;
                    }
                    dir_ready = true;
                }

                if let Err(e) = append_line(&dir.join(filename), &line).await {
                    warn!(filename, error = %e, "Failed to append audit log line");
                }
            }
            AuditEvent::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
}

async fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path).await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await
}

fn timestamp() -> String {
    Utc::now().format("%Y-%m-%d\t%H:%M:%S").to_string()
}

fn request_line(entry: &RequestEntry) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
        timestamp(),
        Uuid::new_v4(),
        entry.method,
        entry.uri,
        entry.origin,
        entry.remote_addr,
        entry.platform,
        entry.user_agent,
    )
}

fn error_line(name: &str, message: &str, origin: &str) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\n",
        timestamp(),
        Uuid::new_v4(),
        message,
        name,
        origin,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_entry() -> RequestEntry {
        RequestEntry {
            method: "GET".to_string(),
            uri: "/user".to_string(),
            origin: "http://localhost:3000".to_string(),
            remote_addr: "127.0.0.1:54321".to_string(),
            platform: "\"Linux\"".to_string(),
            user_agent: "curl/8.0".to_string(),
        }
    }

    #[test]
    fn test_request_line_format() {
        let line = request_line(&test_entry());

        let fields: Vec<&str> = line.trim_end().split('\t').collect();
        // date, time, uuid, method, uri, origin, remote, platform, user-agent
        assert_eq!(fields.len(), 9);
        assert_eq!(fields[3], "GET");
        assert_eq!(fields[4], "/user");
        assert_eq!(fields[8], "curl/8.0");
        assert!(line.ends_with('\n'));

        // Field 2 is a uuid
        assert!(Uuid::parse_str(fields[2]).is_ok());
    }

    #[test]
    fn test_error_line_format() {
        let line = error_line("InternalError", "hash failure", "http://localhost:3000");

        let fields: Vec<&str> = line.trim_end().split('\t').collect();
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[3], "hash failure");
        assert_eq!(fields[4], "InternalError");
        assert_eq!(fields[5], "http://localhost:3000");
    }

    #[tokio::test]
    async fn test_writer_creates_dir_and_appends() {
        let dir = std::env::temp_dir().join(format!("audit-test-{}", Uuid::new_v4()));
        let log = AuditLog::new(&dir);

        log.request(test_entry());
        log.error("NotFoundError", "No User found", "-");
        log.flush().await;

        let req = std::fs::read_to_string(dir.join(REQUEST_LOG_FILE)).unwrap();
        assert!(req.contains("GET\t/user"));

        let err = std::fs::read_to_string(dir.join(ERROR_LOG_FILE)).unwrap();
        assert!(err.contains("No User found\tNotFoundError"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_lines_are_serialized_in_order() {
        let dir = std::env::temp_dir().join(format!("audit-test-{}", Uuid::new_v4()));
        let log = AuditLog::new(&dir);

        for i in 0..50 {
            let mut entry = test_entry();
            entry.uri = format!("/user/{i}");
            log.request(entry);
        }
        log.flush().await;

        let contents = std::fs::read_to_string(dir.join(REQUEST_LOG_FILE)).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 50);
        assert!(lines[0].contains("/user/0"));
        assert!(lines[49].contains("/user/49"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
