//! Blocking client

use crate::error::{CtlError, Result};
use crate::status::Status;
use std::io::{BufRead, BufReader, Read, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use ui9_config::Environment;

pub const SOCKET_NAME: &str = "9de.sock";

/// `$XDG_RUNTIME_DIR/9de.sock`, or `/tmp/9de.sock` when unset.
pub fn socket_path(env: &dyn Environment) -> PathBuf {
    let dir = env
        .var("XDG_RUNTIME_DIR")
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "/tmp".to_string());
    Path::new(&dir).join(SOCKET_NAME)
}

#[derive(Clone, Debug)]
pub struct Client {
    path: PathBuf,
}

impl Client {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env(env: &dyn Environment) -> Self {
        Self::new(socket_path(env))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn request(&self, line: &str) -> Result<BufReader<UnixStream>> {
        let mut stream = UnixStream::connect(&self.path)?;
        stream.write_all(line.as_bytes())?;
        stream.write_all(b"\n")?;
        Ok(BufReader::new(stream))
    }

    /// Send one command and return its reply line.
    pub fn ctl(&self, command: &str) -> Result<String> {
        let mut reader = self.request(&format!("ctl {}", command.trim()))?;
        let mut reply = String::new();
        reader.read_line(&mut reply)?;
        let reply = reply.trim_end();
        if reply.is_empty() {
            return Err(CtlError::Protocol("empty reply".into()));
        }
        Ok(reply.to_string())
    }

    pub fn status(&self) -> Result<Status> {
        let mut reader = self.request("status")?;
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Status::parse(&text)
    }

    /// Subscribe to events. Lines already queued arrive first.
    pub fn events(&self) -> Result<Events> {
        Ok(Events {
            reader: self.request("events")?,
            done: false,
        })
    }
}

/// Event lines, without their newline. Ends when the server hangs up.
pub struct Events {
    reader: BufReader<UnixStream>,
    done: bool,
}

impl Iterator for Events {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) if line == "err events busy\n" => {
                self.done = true;
                Some(Err(CtlError::Busy))
            }
            Ok(_) => Some(Ok(line.trim_end_matches('\n').to_string())),
            Err(e) => {
                self.done = true;
                Some(Err(e.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui9_config::MapEnv;

    #[test]
    fn test_socket_path() {
        let env = MapEnv::new().with("XDG_RUNTIME_DIR", "/run/user/1000");
        assert_eq!(socket_path(&env), PathBuf::from("/run/user/1000/9de.sock"));

        let env = MapEnv::new().with("XDG_RUNTIME_DIR", "");
        assert_eq!(socket_path(&env), PathBuf::from("/tmp/9de.sock"));
        assert_eq!(socket_path(&MapEnv::new()), PathBuf::from("/tmp/9de.sock"));
    }

    #[test]
    fn test_connect_failure_is_io() {
        let dir = tempfile::tempdir().unwrap();
        let client = Client::new(dir.path().join("nobody.sock"));
        assert!(matches!(client.ctl("ping"), Err(CtlError::Io(_))));
    }
}
