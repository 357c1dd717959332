use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::io::AsyncWriteExt;

use crate::domain::{Clock, SessionStore, SessionToken};

// Persisted form of the credential, like a cookie with max-age.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
    expires_at: u64,
}

impl StoredSession {
    fn live_token(&self, now: u64) -> Option<SessionToken> {
        if self.expires_at <= now {
            return None;
        }
        SessionToken::new(self.token.clone())
    }
}

// In-memory session store, shared between clones.
#[derive(Clone)]
pub struct MemorySessionStore<C> {
    entry: Arc<Mutex<Option<StoredSession>>>,
    clock: C,
}

impl<C: Clock> MemorySessionStore<C> {
    pub fn new(clock: C) -> Self {
        Self {
            entry: Arc::new(Mutex::new(None)),
            clock,
        }
    }
}

#[async_trait]
impl<C: Clock> SessionStore for MemorySessionStore<C> {
    async fn get_token(&self) -> Result<Option<SessionToken>, String> {
        let mut entry = self
            .entry
            .lock()
            .map_err(|_| "session mutex poisoned".to_string())?;
        let now = self.clock.now_epoch_seconds();
        match entry.as_ref().map(|stored| stored.live_token(now)) {
            Some(Some(token)) => Ok(Some(token)),
            Some(None) => {
                // Drop the expired entry so it is not read again.
                *entry = None;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set_token(&self, token: SessionToken, ttl_seconds: u64) -> Result<(), String> {
        let expires_at = self.clock.now_epoch_seconds().saturating_add(ttl_seconds);
        let mut entry = self
            .entry
            .lock()
            .map_err(|_| "session mutex poisoned".to_string())?;
        *entry = Some(StoredSession {
            token: token.as_str().to_string(),
            expires_at,
        });
        Ok(())
    }

    async fn clear_token(&self) -> Result<(), String> {
        let mut entry = self
            .entry
            .lock()
            .map_err(|_| "session mutex poisoned".to_string())?;
        *entry = None;
        Ok(())
    }
}

// TOML-file session store used by the CLI across invocations.
#[derive(Clone)]
pub struct FileSessionStore<C> {
    path: PathBuf,
    clock: C,
}

impl<C: Clock> FileSessionStore<C> {
    pub fn new(path: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    async fn remove_file(&self) -> Result<(), String> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(format!(
                "failed to remove session file {}: {err}",
                self.path.display()
            )),
        }
    }
}

#[async_trait]
impl<C: Clock> SessionStore for FileSessionStore<C> {
    async fn get_token(&self) -> Result<Option<SessionToken>, String> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(format!(
                    "failed to read session file {}: {err}",
                    self.path.display()
                ));
            }
        };
        let stored: StoredSession = toml::from_str(&raw).map_err(|err| {
            format!("failed to parse session file {}: {err}", self.path.display())
        })?;

        let token = stored.live_token(self.clock.now_epoch_seconds());
        if token.is_none() {
            // Best-effort cleanup of an expired session.
            if let Err(err) = self.remove_file().await {
                tracing::warn!(error = %err, "failed to remove expired session");
            }
        }
        Ok(token)
    }

    async fn set_token(&self, token: SessionToken, ttl_seconds: u64) -> Result<(), String> {
        let stored = StoredSession {
            token: token.as_str().to_string(),
            expires_at: self.clock.now_epoch_seconds().saturating_add(ttl_seconds),
        };
        let raw = toml::to_string(&stored)
            .map_err(|err| format!("failed to encode session: {err}"))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| format!("failed to create {}: {err}", parent.display()))?;
        }
        write_private(&self.path, raw.as_bytes()).await.map_err(|err| {
            format!("failed to write session file {}: {err}", self.path.display())
        })
    }

    async fn clear_token(&self) -> Result<(), String> {
        self.remove_file().await
    }
}

// The file holds a bearer credential, so it is readable by the owner only.
async fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);
    let mut file = options.open(path).await?;
    // `mode` only applies on creation; tighten a file left by an older write.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))
            .await?;
    }
    file.write_all(contents).await?;
    file.flush().await
}

// System clock adapter used by the session stores.
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}
