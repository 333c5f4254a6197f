use crate::traits::RecordStore;
use async_trait::async_trait;
use herodex_core::{HerodexError, HerodexResult, Page};
use herodex_domain::{Hero, HeroId};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};

/// Record store backed by a JSON-lines file: one serialized hero per line,
/// no header, no index. The file is the data.
///
/// `append` is a plain file append. `update` and `delete` are copy-rewrite:
/// every line is streamed into a temp file in the same directory, the
/// targeted line rewritten or omitted, then the temp file atomically
/// renamed over the original. The original is untouched until the rename,
/// so a crash mid-rewrite never leaves a truncated data file.
#[derive(Debug)]
pub struct JsonlStore {
    path: PathBuf,
    dir: PathBuf,
    size: usize,
}

impl JsonlStore {
    /// Open (or create) the data file. Fails fast when `path` has no
    /// usable parent directory, e.g. a filesystem root.
    pub async fn open(path: impl AsRef<Path>) -> HerodexResult<Self> {
        let path = path.as_ref().to_path_buf();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => {
                return Err(HerodexError::Storage(format!(
                    "data file path must include a parent directory, given: {}",
                    path.display()
                )))
            }
        };

        fs::create_dir_all(&dir).await?;
        if fs::metadata(&path).await.is_err() {
            fs::File::create(&path).await?;
        }

        let size = Self::count_records(&path).await?;
        tracing::debug!("Opened {} with {} records", path.display(), size);
        Ok(Self { path, dir, size })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn count_records(path: &Path) -> HerodexResult<usize> {
        let file = fs::File::open(path).await?;
        let mut lines = BufReader::new(file).lines();
        let mut count = 0;
        while let Some(line) = lines.next_line().await? {
            if !line.trim().is_empty() {
                count += 1;
            }
        }
        Ok(count)
    }

    fn parse_line(line: &str) -> HerodexResult<Hero> {
        serde_json::from_str(line).map_err(|e| HerodexError::Serialization(e.to_string()))
    }

    /// Copy-rewrite: emit every record unchanged except the one matching
    /// `id`, which is rewritten (`Some`) or omitted (`None`). Returns
    /// whether the target was found; the original file is only replaced
    /// when it was.
    async fn rewrite(&self, id: HeroId, replacement: Option<&Hero>) -> HerodexResult<bool> {
        let source = fs::File::open(&self.path).await?;
        let mut lines = BufReader::new(source).lines();

        let temp = tempfile::NamedTempFile::new_in(&self.dir)?;
        let temp_path = temp.path().to_path_buf();
        let mut writer = BufWriter::new(fs::File::create(&temp_path).await?);

        let mut changed = false;
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let current = Self::parse_line(&line)?;
            if current.id != id {
                writer.write_all(line.as_bytes()).await?;
                writer.write_all(b"\n").await?;
            } else if let Some(updated) = replacement {
                let mut merged = current;
                merged.overwrite_with(updated);
                let rewritten = serde_json::to_string(&merged)
                    .map_err(|e| HerodexError::Serialization(e.to_string()))?;
                writer.write_all(rewritten.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                changed = true;
            } else {
                changed = true; // delete: line omitted
            }
        }
        writer.flush().await?;

        if changed {
            fs::rename(&temp_path, &self.path).await?;
        }
        // An unrenamed temp file is removed when `temp` drops.
        Ok(changed)
    }
}

#[async_trait]
impl RecordStore for JsonlStore {
    async fn size(&self) -> HerodexResult<usize> {
        Ok(self.size)
    }

    async fn append(&mut self, hero: Hero) -> HerodexResult<HeroId> {
        let id = hero.id;
        let line =
            serde_json::to_string(&hero).map_err(|e| HerodexError::Serialization(e.to_string()))?;

        let mut file = fs::OpenOptions::new()
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;

        self.size += 1;
        tracing::debug!("Appended hero {} to {}", id, self.path.display());
        Ok(id)
    }

    async fn get_page(&self, page: &Page) -> HerodexResult<Vec<Hero>> {
        let file = fs::File::open(&self.path).await?;
        let mut lines = BufReader::new(file).lines();

        let mut heroes = Vec::with_capacity(page.limit());
        let mut index = 0;
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if index >= page.offset() {
                heroes.push(Self::parse_line(&line)?);
                if heroes.len() == page.limit() {
                    break;
                }
            }
            index += 1;
        }
        Ok(heroes)
    }

    async fn get(&self, id: HeroId) -> HerodexResult<Option<Hero>> {
        let file = fs::File::open(&self.path).await?;
        let mut lines = BufReader::new(file).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let hero = Self::parse_line(&line)?;
            if hero.id == id {
                return Ok(Some(hero));
            }
        }
        Ok(None)
    }

    async fn update(&mut self, id: HeroId, updated: &Hero) -> HerodexResult<bool> {
        self.rewrite(id, Some(updated)).await
    }

    async fn delete(&mut self, id: HeroId) -> HerodexResult<bool> {
        let deleted = self.rewrite(id, None).await?;
        if deleted {
            self.size -= 1;
        }
        Ok(deleted)
    }
}
