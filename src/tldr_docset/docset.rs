use crate::error::Result;
use crate::index::INDEX_FILENAME;
use crate::page::Page;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const DOCSET_DIRNAME: &str = "tldrpages.docset";
pub const ARCHIVE_FILENAME: &str = "tldr_pages.tgz";

// Static assets are compiled into the binary so the generator does not
// depend on where it is run from.
const STYLESHEET: &str = include_str!("../../static/style.css");
const INFO_PLIST: &str = include_str!("../../static/Info.plist");
const ICON: &[u8] = include_bytes!("../../static/icon.png");
const ICON_2X: &[u8] = include_bytes!("../../static/icon@2x.png");

const LANDING_HEADER: &str = r#"<html><head></head><body><h1>TLDR pages Docset</h1><br/>powered by <a href="http://tldr-pages.github.io">tldr-pages.github.io/</a>"#;

/// The docset bundle on disk, rooted at `<out_dir>/tldrpages.docset`.
pub struct DocsetLayout {
    root: PathBuf,
}

impl DocsetLayout {
    pub fn new(out_dir: &Path) -> Self {
        Self {
            root: out_dir.join(DOCSET_DIRNAME),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn contents_dir(&self) -> PathBuf {
        self.root.join("Contents")
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.contents_dir().join("Resources")
    }

    pub fn documents_dir(&self) -> PathBuf {
        self.resources_dir().join("Documents")
    }

    pub fn index_file(&self) -> PathBuf {
        self.resources_dir().join(INDEX_FILENAME)
    }

    /// Remove any document tree left over from a previous run, then create
    /// the full directory chain.
    pub fn prepare(&self) -> Result<()> {
        let documents = self.documents_dir();
        if documents.exists() {
            fs::remove_dir_all(&documents)?;
        }
        fs::create_dir_all(&documents)?;
        Ok(())
    }

    /// Write one rendered page under its category subdirectory.
    pub fn write_page(&self, page: &Page, html: &str) -> Result<PathBuf> {
        let target = self.documents_dir().join(page.index_path());
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, html)?;
        Ok(target)
    }

    /// Write the landing page: one heading per category subdirectory with a
    /// link list of its pages, in directory-enumeration order.
    pub fn write_landing_page(&self) -> Result<()> {
        let documents = self.documents_dir();
        let mut html = String::from(LANDING_HEADER);

        for entry in fs::read_dir(&documents)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let category = entry.file_name().to_string_lossy().into_owned();
            html.push_str(&format!("<h2>{category}</h2><ul>"));

            for page in fs::read_dir(entry.path())? {
                let page = page?;
                let file_name = page.file_name().to_string_lossy().into_owned();
                let label = file_name.strip_suffix(".html").unwrap_or(&file_name);
                html.push_str(&format!(
                    r#"<li><a href="{category}/{file_name}">{label}</a></li>"#
                ));
            }
            html.push_str("</ul>");
        }

        html.push_str("</body></html>");
        fs::write(documents.join("index.html"), html)?;
        Ok(())
    }

    /// Install the embedded assets: stylesheet next to the documents, the
    /// plist under Contents/, icons at the bundle root.
    pub fn install_static_assets(&self) -> Result<()> {
        fs::write(self.documents_dir().join("style.css"), STYLESHEET)?;
        fs::write(self.contents_dir().join("Info.plist"), INFO_PLIST)?;
        fs::write(self.root.join("icon.png"), ICON)?;
        fs::write(self.root.join("icon@2x.png"), ICON_2X)?;
        Ok(())
    }

    /// Package the whole bundle into an uncompressed tar in `out_dir`.
    pub fn package(&self, out_dir: &Path) -> Result<PathBuf> {
        let archive_path = out_dir.join(ARCHIVE_FILENAME);
        let file = File::create(&archive_path)?;
        let mut builder = tar::Builder::new(file);
        builder.append_dir_all(DOCSET_DIRNAME, &self.root)?;
        builder.finish()?;
        Ok(archive_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_in_temp() -> (tempfile::TempDir, DocsetLayout) {
        let dir = tempfile::tempdir().unwrap();
        let layout = DocsetLayout::new(dir.path());
        layout.prepare().unwrap();
        (dir, layout)
    }

    fn page(category: &str, name: &str) -> Page {
        Page {
            category: category.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_prepare_drops_stale_documents() {
        let (_dir, layout) = layout_in_temp();
        let stale = layout.documents_dir().join("osx/stale.html");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "<html></html>").unwrap();

        layout.prepare().unwrap();
        assert!(!stale.exists());
        assert!(layout.documents_dir().exists());
    }

    #[test]
    fn test_write_page_creates_category_dir() {
        let (_dir, layout) = layout_in_temp();
        let target = layout.write_page(&page("git", "commit"), "<html></html>").unwrap();
        assert_eq!(target, layout.documents_dir().join("git/commit.html"));
        assert!(target.exists());
    }

    #[test]
    fn test_landing_page_lists_categories_and_pages() {
        let (_dir, layout) = layout_in_temp();
        layout.write_page(&page("common", "ls"), "<html></html>").unwrap();
        layout.write_page(&page("git", "commit"), "<html></html>").unwrap();
        layout.write_landing_page().unwrap();

        let html = fs::read_to_string(layout.documents_dir().join("index.html")).unwrap();
        assert!(html.contains("<h2>common</h2>"));
        assert!(html.contains("<h2>git</h2>"));
        assert!(html.contains(r#"<a href="common/ls.html">ls</a>"#));
        assert!(html.contains(r#"<a href="git/commit.html">commit</a>"#));
    }

    #[test]
    fn test_landing_page_skips_plain_files() {
        let (_dir, layout) = layout_in_temp();
        layout.install_static_assets().unwrap();
        layout.write_landing_page().unwrap();

        let html = fs::read_to_string(layout.documents_dir().join("index.html")).unwrap();
        assert!(!html.contains("style.css"));
    }

    #[test]
    fn test_static_assets_land_in_fixed_locations() {
        let (_dir, layout) = layout_in_temp();
        layout.install_static_assets().unwrap();

        assert!(layout.documents_dir().join("style.css").exists());
        assert!(layout.contents_dir().join("Info.plist").exists());
        assert!(layout.root().join("icon.png").exists());
        assert!(layout.root().join("icon@2x.png").exists());
    }

    #[test]
    fn test_package_archives_the_bundle() {
        let (dir, layout) = layout_in_temp();
        layout.write_page(&page("common", "ls"), "<html></html>").unwrap();
        layout.install_static_assets().unwrap();

        let archive_path = layout.package(dir.path()).unwrap();
        assert_eq!(archive_path, dir.path().join(ARCHIVE_FILENAME));

        let mut archive = tar::Archive::new(File::open(&archive_path).unwrap());
        let names: Vec<String> = archive
            .entries()
            .unwrap()
            .map(|e| e.unwrap().path().unwrap().to_string_lossy().into_owned())
            .collect();
        assert!(names
            .iter()
            .any(|n| n == "tldrpages.docset/Contents/Resources/Documents/common/ls.html"));
        assert!(names.iter().any(|n| n == "tldrpages.docset/icon.png"));
    }
}
