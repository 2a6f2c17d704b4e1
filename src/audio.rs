//! Transient storage for narration clips.
//!
//! Each request gets its own clip file, named by a fresh id inside a
//! process-scoped temporary directory, so concurrent sessions never race on
//! a shared filename. The store keeps a bounded index of recent clips and
//! deletes the oldest file when the bound is exceeded; everything disappears
//! with the temp dir on shutdown.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::sync::Mutex;
use tempfile::TempDir;
use uuid::Uuid;

/// How many clips are kept playable at once.
const MAX_CLIPS: usize = 16;

pub struct AudioStore {
    dir: TempDir,
    recent: Mutex<VecDeque<Uuid>>,
}

impl AudioStore {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: TempDir::new().context("Failed to create transient audio directory")?,
            recent: Mutex::new(VecDeque::new()),
        })
    }

    fn clip_path(&self, id: &Uuid) -> std::path::PathBuf {
        self.dir.path().join(format!("{}.mp3", id))
    }

    /// Persist one clip and return its playback id.
    pub fn put(&self, bytes: &[u8]) -> Result<Uuid> {
        let id = Uuid::new_v4();
        std::fs::write(self.clip_path(&id), bytes)
            .context("Failed to persist narration clip")?;

        let mut recent = self.recent.lock().expect("audio store lock poisoned");
        recent.push_back(id);
        while recent.len() > MAX_CLIPS {
            if let Some(evicted) = recent.pop_front() {
                // Best-effort cleanup; the temp dir catches stragglers
                let _ = std::fs::remove_file(self.clip_path(&evicted));
            }
        }

        Ok(id)
    }

    /// Read a clip back for streaming. `None` once evicted or never stored.
    pub fn get(&self, id: &Uuid) -> Option<Vec<u8>> {
        {
            let recent = self.recent.lock().expect("audio store lock poisoned");
            if !recent.contains(id) {
                return None;
            }
        }
        std::fs::read(self.clip_path(id)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_then_get_roundtrip() {
        let store = AudioStore::new().unwrap();
        let bytes = vec![0xFF, 0xF3, 0x18, 0xC4];

        let id = store.put(&bytes).unwrap();
        assert_eq!(store.get(&id), Some(bytes));
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = AudioStore::new().unwrap();
        assert_eq!(store.get(&Uuid::new_v4()), None);
    }

    #[test]
    fn test_each_put_gets_a_distinct_id() {
        let store = AudioStore::new().unwrap();
        let id1 = store.put(b"one").unwrap();
        let id2 = store.put(b"two").unwrap();

        assert_ne!(id1, id2);
        assert_eq!(store.get(&id1), Some(b"one".to_vec()));
        assert_eq!(store.get(&id2), Some(b"two".to_vec()));
    }

    #[test]
    fn test_oldest_clip_is_evicted_beyond_bound() {
        let store = AudioStore::new().unwrap();

        let first = store.put(b"first").unwrap();
        let mut last = first;
        for i in 0..MAX_CLIPS {
            last = store.put(format!("clip-{}", i).as_bytes()).unwrap();
        }

        assert_eq!(store.get(&first), None, "oldest clip should be evicted");
        assert!(store.get(&last).is_some(), "newest clip should survive");
    }

    #[test]
    fn test_clips_live_in_isolated_files() {
        let store = AudioStore::new().unwrap();
        let id = store.put(b"payload").unwrap();

        let path = store.clip_path(&id);
        assert!(path.exists());
        assert!(path.to_string_lossy().ends_with(&format!("{}.mp3", id)));
    }
}
