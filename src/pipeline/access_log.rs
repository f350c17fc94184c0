use axum::extract::{ConnectInfo, Request, State};
use axum::http::{Method, Uri};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, Local, SecondsFormat};
use once_cell::sync::OnceCell;
use std::fmt;
use std::io::{self, Write};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, NonBlockingBuilder, WorkerGuard};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};

const WRITER_THREAD: &str = "access-log";

#[derive(Error, Debug)]
pub enum AccessLogError {
    #[error("access log path {} does not name a file", .0.display())]
    InvalidPath(PathBuf),

    #[error("failed to open access log {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: InitError,
    },

    #[error("failed to queue access log line: {0}")]
    Write(#[from] io::Error),
}

/// Append-only request log shared by every request of the process.
///
/// The file is opened on the first record and kept open afterwards. Lines
/// are handed to a dedicated writer thread, so request tasks never block on
/// file I/O. Dropping the log flushes whatever is still queued.
pub struct AccessLog {
    path: PathBuf,
    sink: OnceCell<Sink>,
}

struct Sink {
    writer: NonBlocking,
    _guard: WorkerGuard,
}

/// One served request, rendered as
/// `<timestamp> <METHOD> <uri> <remote> <elapsed>`.
#[derive(Debug, Clone)]
pub struct AccessEntry {
    pub at: DateTime<Local>,
    pub method: Method,
    pub uri: Uri,
    pub remote: Option<SocketAddr>,
    pub elapsed: Duration,
}

impl AccessLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sink: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.sink.get().is_some()
    }

    pub fn record(&self, entry: &AccessEntry) -> Result<(), AccessLogError> {
        let sink = self.sink.get_or_try_init(|| self.open())?;

        // One write per line keeps concurrent entries from interleaving.
        let mut writer = sink.writer.clone();
        writer.write_all(format!("{}\n", entry).as_bytes())?;
        Ok(())
    }

    fn open(&self) -> Result<Sink, AccessLogError> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| AccessLogError::InvalidPath(self.path.clone()))?;
        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        tracing::info!("Opening access log at {}", self.path.display());
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(file_name.to_string_lossy())
            .build(directory)
            .map_err(|source| AccessLogError::Open {
                path: self.path.clone(),
                source,
            })?;

        let (writer, guard) = NonBlockingBuilder::default()
            .lossy(false)
            .thread_name(WRITER_THREAD)
            .finish(appender);

        Ok(Sink {
            writer,
            _guard: guard,
        })
    }
}

impl fmt::Display for AccessEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ",
            self.at.to_rfc3339_opts(SecondsFormat::Secs, false),
            self.method,
            self.uri
        )?;
        match self.remote {
            Some(addr) => write!(f, "{}", addr)?,
            None => f.write_str("-")?,
        }
        write!(f, " {:?}", self.elapsed)
    }
}

pub async fn log_request(
    State(log): State<Arc<AccessLog>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let started = Instant::now();
    let response = next.run(request).await;
    let elapsed = started.elapsed();

    tracing::debug!(
        "{} {} -> {} in {:?}",
        method,
        uri,
        response.status(),
        elapsed
    );

    let entry = AccessEntry {
        at: Local::now(),
        method,
        uri,
        remote,
        elapsed,
    };
    if let Err(e) = log.record(&entry) {
        tracing::error!("{}", e);
    }

    response
}
