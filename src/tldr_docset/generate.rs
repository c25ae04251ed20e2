use crate::config::DocsetConfig;
use crate::docset::DocsetLayout;
use crate::error::Result;
use crate::index::SearchIndex;
use crate::page::Page;
use crate::render;
use crate::source::Corpus;
use std::io::Read;
use std::path::PathBuf;

/// Where the corpus comes from. Exactly one mode is selected per run.
#[derive(Debug, Clone)]
pub enum SourceMode {
    /// Fetch the packaged archive from the configured URL
    Remote,
    /// Package a local corpus checkout
    LocalDir(PathBuf),
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub source: SourceMode,
    /// Directory the docset bundle and tar archive are written into
    pub out_dir: PathBuf,
}

/// What a run produced, for the CLI to report.
#[derive(Debug)]
pub struct Report {
    pub pages: usize,
    pub indexed: usize,
    pub docset_dir: PathBuf,
    pub archive: PathBuf,
}

/// Run the whole pipeline: prepare the output tree, reset the search
/// index, load the corpus, render and index every page, then assemble and
/// package the bundle. The first error aborts the run.
pub fn run(
    config: &DocsetConfig,
    options: &GenerateOptions,
    mut progress: impl FnMut(&str),
) -> Result<Report> {
    // An invalid corpus directory must not leave a half-prepared tree.
    if let SourceMode::LocalDir(dir) = &options.source {
        if !dir.is_dir() {
            return Err(crate::error::DocsetError::NotADirectory(dir.clone()));
        }
    }

    let layout = DocsetLayout::new(&options.out_dir);
    layout.prepare()?;

    let index = SearchIndex::open(&layout.index_file())?;

    let corpus = match &options.source {
        SourceMode::Remote => Corpus::fetch(
            &config.source_url,
            &config.remote_prefix,
            config.fetch_timeout(),
        )?,
        SourceMode::LocalDir(dir) => Corpus::package_dir(dir)?,
    };

    let mut archive = corpus.open()?;
    let mut pages = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let entry_name = entry.name().to_string();
        let Some(page) = Page::from_entry(corpus.prefix(), &entry_name) else {
            continue;
        };
        progress(&format!("Compiling: {entry_name}"));

        let mut raw = Vec::new();
        entry.read_to_end(&mut raw)?;
        let html = render::render_page(&String::from_utf8_lossy(&raw));

        layout.write_page(&page, &html)?;
        index.insert(&page.display_name(), &page.index_path())?;
        pages += 1;
    }
    drop(archive);
    let indexed = index.record_count()?;
    index.close()?;

    layout.write_landing_page()?;
    layout.install_static_assets()?;
    let archive_path = layout.package(&options.out_dir)?;

    // Dropping the corpus removes local mode's temporary zip.
    drop(corpus);

    Ok(Report {
        pages,
        indexed,
        docset_dir: layout.root().to_path_buf(),
        archive: archive_path,
    })
}
