use crate::error::{DocsetError, Result};
use std::fs::{self, File};
use std::io::{self, Cursor};
use std::path::Path;
use std::time::Duration;
use tempfile::TempPath;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Pages directory inside a zip packaged from a local corpus checkout.
/// Remote archives nest it under the repository directory instead
/// (see `DocsetConfig::remote_prefix`).
pub const LOCAL_PREFIX: &str = "pages";

/// A loaded corpus: zip bytes plus the prefix under which page files live.
#[derive(Debug)]
pub struct Corpus {
    data: Vec<u8>,
    prefix: String,
    /// Local mode's temporary zip. Held until the corpus is dropped at the
    /// end of the run, at which point the file is removed.
    temp: Option<TempPath>,
}

impl Corpus {
    /// Fetch the packaged pages archive over HTTP. Connection failures and
    /// non-success statuses are fatal.
    pub fn fetch(url: &str, prefix: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tldr-docset/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DocsetError::fetch(url, &e))?;

        let response = client
            .get(url)
            .send()
            .map_err(|e| DocsetError::fetch(url, &e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(DocsetError::Fetch {
                url: url.to_string(),
                reason: format!("server responded with {status}"),
            });
        }

        let data = response
            .bytes()
            .map_err(|e| DocsetError::fetch(url, &e))?
            .to_vec();
        Ok(Self {
            data,
            prefix: prefix.to_string(),
            temp: None,
        })
    }

    /// Package a local corpus directory into a zip equivalent to the remote
    /// archive. Version-control metadata (any `.git*` entry) is skipped.
    pub fn package_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(DocsetError::NotADirectory(dir.to_path_buf()));
        }

        let temp = tempfile::Builder::new().suffix(".zip").tempfile()?;
        let mut zip = ZipWriter::new(temp.reopen()?);
        add_dir(&mut zip, dir, Path::new(""))?;
        zip.finish()?;

        let data = fs::read(temp.path())?;
        Ok(Self {
            data,
            prefix: LOCAL_PREFIX.to_string(),
            temp: Some(temp.into_temp_path()),
        })
    }

    /// Open the corpus zip for entry iteration.
    pub fn open(&self) -> Result<ZipArchive<Cursor<&[u8]>>> {
        Ok(ZipArchive::new(Cursor::new(self.data.as_slice()))?)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

fn add_dir(zip: &mut ZipWriter<File>, root: &Path, rel: &Path) -> Result<()> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in fs::read_dir(root.join(rel))? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().starts_with(".git") {
            continue;
        }

        let entry_rel = rel.join(&name);
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            add_dir(zip, root, &entry_rel)?;
        } else if file_type.is_file() {
            // Zip member names always use forward slashes.
            let member = entry_rel.to_string_lossy().replace('\\', "/");
            zip.start_file(member, options)?;
            let mut file = File::open(entry.path())?;
            io::copy(&mut file, zip)?;
        }
    }
    Ok(())
}
