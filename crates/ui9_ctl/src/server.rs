//! Socket server

use crate::error::{CtlError, Result};
use crate::hub::{lock, Hub, SharedHub};
use crate::queue::Next;
use std::os::unix::net::UnixListener as StdUnixListener;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::unix::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{UnixListener, UnixStream};

/// The control service, bound but not yet serving.
///
/// Binding happens outside any runtime so callers can bind on one thread
/// and serve on another.
pub struct Server {
    listener: StdUnixListener,
    path: PathBuf,
    hub: SharedHub,
}

impl Server {
    /// Bind the socket at `path`, replacing a stale socket file left by a
    /// dead server. Posts `ok boot`.
    pub fn bind(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.exists() {
            if std::os::unix::net::UnixStream::connect(&path).is_ok() {
                return Err(CtlError::AlreadyRunning(path));
            }
            tracing::debug!(path = %path.display(), "removing stale socket");
            std::fs::remove_file(&path)?;
        }

        let listener = StdUnixListener::bind(&path)?;
        listener.set_nonblocking(true)?;

        let mut hub = Hub::new();
        hub.post("ok boot");
        tracing::info!(path = %path.display(), "control service bound");

        Ok(Self {
            listener,
            path,
            hub: hub.shared(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Handle on the shared state, for posting events from the host process.
    pub fn hub(&self) -> SharedHub {
        self.hub.clone()
    }

    /// Accept connections until accept fails.
    pub async fn run(self) -> Result<()> {
        let listener = UnixListener::from_std(self.listener)?;
        loop {
            let (stream, _) = listener.accept().await?;
            let hub = self.hub.clone();
            tokio::spawn(async move {
                if let Err(e) = handle(stream, hub).await {
                    tracing::debug!("control connection ended: {e}");
                }
            });
        }
    }
}

async fn handle(stream: UnixStream, hub: SharedHub) -> Result<()> {
    let (read, mut write) = stream.into_split();
    let mut reader = BufReader::new(read);

    let mut request = String::new();
    if reader.read_line(&mut request).await? == 0 {
        return Ok(());
    }
    let request = request.trim();
    let (verb, rest) = request.split_once(' ').unwrap_or((request, ""));

    match verb {
        "ctl" => {
            let reply = lock(&hub).execute(rest);
            write.write_all(format!("{reply}\n").as_bytes()).await?;
        }
        "status" => {
            let text = lock(&hub).state.status().to_text();
            write.write_all(text.as_bytes()).await?;
        }
        "events" => stream_events(reader, write, hub).await?,
        _ => {
            tracing::debug!(request, "unknown request");
            write.write_all(b"err unknown\n").await?;
        }
    }
    Ok(())
}

/// Releases the events-reader slot when the stream ends.
struct ReaderClaim(SharedHub);

impl ReaderClaim {
    fn acquire(hub: &SharedHub) -> Option<Self> {
        lock(hub).claim_reader().then(|| ReaderClaim(hub.clone()))
    }
}

impl Drop for ReaderClaim {
    fn drop(&mut self) {
        lock(&self.0).release_reader();
    }
}

async fn stream_events(
    mut reader: BufReader<OwnedReadHalf>,
    mut write: OwnedWriteHalf,
    hub: SharedHub,
) -> Result<()> {
    let Some(_claim) = ReaderClaim::acquire(&hub) else {
        write.write_all(b"err events busy\n").await?;
        return Ok(());
    };

    let mut scratch = [0u8; 64];
    loop {
        let next = lock(&hub).events.next()?;
        let line = match next {
            Next::Ready(line) => line,
            Next::Pending(rx) => {
                tokio::select! {
                    posted = rx => match posted {
                        Ok(line) => line,
                        Err(_) => return Ok(()),
                    },
                    // Watch for the reader hanging up while we wait.
                    n = reader.read(&mut scratch) => match n {
                        Ok(0) | Err(_) => return Ok(()),
                        Ok(_) => continue,
                    },
                }
            }
        };
        write.write_all(line.as_bytes()).await?;
    }
}
