// src/modules/avatar/loader.rs
use std::sync::atomic::{AtomicBool, Ordering};

use super::{AvatarDatabase, AvatarGenerator};
use crate::util::database::Database;
use crate::{log_error, log_info, log_warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarOutcome {
    /// Served from the local cache; no network call was made.
    Cached(String),
    /// Freshly generated and written to the cache.
    Generated(String),
    /// Generation failed or produced no image. Already logged.
    Unavailable,
    /// A previous call in this process already ran.
    AlreadyAttempted,
}

impl AvatarOutcome {
    pub fn data_url(&self) -> Option<&str> {
        match self {
            AvatarOutcome::Cached(url) | AvatarOutcome::Generated(url) => Some(url),
            _ => None,
        }
    }
}

/// Cache-first, one-shot avatar resolution.
#[derive(Debug)]
pub struct AvatarLoader<G> {
    database: Database,
    generator: G,
    cache_key: String,
    prompt: String,
    attempted: AtomicBool,
}

impl<G: AvatarGenerator> AvatarLoader<G> {
    pub fn new(database: Database, generator: G, cache_key: String, prompt: String) -> Self {
        Self {
            database,
            generator,
            cache_key,
            prompt,
            attempted: AtomicBool::new(false),
        }
    }

    /// Resolve the avatar. Runs at most once per loader regardless of outcome;
    /// failures are logged, never retried.
    pub async fn load(&self) -> AvatarOutcome {
        if self.attempted.swap(true, Ordering::SeqCst) {
            return AvatarOutcome::AlreadyAttempted;
        }

        match self.database.get_cached_avatar(&self.cache_key) {
            Ok(Some(url)) => {
                log_info!("Avatar served from cache");
                return AvatarOutcome::Cached(url);
            }
            Ok(None) => {}
            Err(e) => log_warn!("Avatar cache read failed, generating instead: {}", e),
        }

        match self.generator.generate(&self.prompt).await {
            Ok(url) => {
                if let Err(e) = self.database.cache_avatar(&self.cache_key, &url) {
                    log_error!("Failed to cache avatar: {}", e);
                }
                log_info!("Avatar generated ({} bytes)", url.len());
                AvatarOutcome::Generated(url)
            }
            Err(e) => {
                log_error!("Failed to generate avatar: {}", e);
                AvatarOutcome::Unavailable
            }
        }
    }
}
