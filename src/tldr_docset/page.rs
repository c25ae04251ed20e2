/// Category holding platform-independent commands. Pages under it are
/// indexed by their bare command name.
pub const COMMON_CATEGORY: &str = "common";

const PAGE_EXTENSION: &str = ".md";

/// One command page derived from a corpus archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Platform/tool-family subdirectory of the page (e.g. "linux", "common")
    pub category: String,
    /// Command name, the file stem of the entry
    pub name: String,
}

impl Page {
    /// Parse an archive member path into a page. Returns `None` for
    /// anything that is not a markdown file strictly under
    /// `<prefix>/<category>/`, so sibling trees such as `pages.fr/`
    /// and non-page files are skipped.
    pub fn from_entry(prefix: &str, entry_path: &str) -> Option<Page> {
        let rel = entry_path.strip_prefix(prefix)?.strip_prefix('/')?;
        let rel = rel.strip_suffix(PAGE_EXTENSION)?;
        let (category, name) = rel.rsplit_once('/')?;
        if category.is_empty() || name.is_empty() {
            return None;
        }
        Some(Page {
            category: category.to_string(),
            name: name.to_string(),
        })
    }

    /// Name shown in the search index: bare command name for the common
    /// category, otherwise prefixed with the category.
    pub fn display_name(&self) -> String {
        if self.category == COMMON_CATEGORY {
            self.name.clone()
        } else {
            format!("{} {}", self.category, self.name)
        }
    }

    /// Path of the rendered page relative to the documents root. Also the
    /// path stored in the search index.
    pub fn index_path(&self) -> String {
        format!("{}/{}.html", self.category, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entry_parses_category_and_name() {
        let page = Page::from_entry("tldr-master/pages", "tldr-master/pages/linux/apt.md").unwrap();
        assert_eq!(page.category, "linux");
        assert_eq!(page.name, "apt");
    }

    #[test]
    fn test_from_entry_accepts_nested_categories() {
        let page = Page::from_entry("pages", "pages/linux/apt/get.md").unwrap();
        assert_eq!(page.category, "linux/apt");
        assert_eq!(page.name, "get");
    }

    #[test]
    fn test_from_entry_rejects_sibling_trees() {
        // `pages.fr` shares the `pages` prefix but is a different corpus.
        assert_eq!(Page::from_entry("pages", "pages.fr/common/ls.md"), None);
        assert_eq!(
            Page::from_entry("tldr-master/pages", "tldr-master/pages.zh/common/ls.md"),
            None
        );
    }

    #[test]
    fn test_from_entry_rejects_wrong_extension() {
        assert_eq!(Page::from_entry("pages", "pages/common/ls.markdown"), None);
        assert_eq!(Page::from_entry("pages", "pages/common/ls.html"), None);
    }

    #[test]
    fn test_from_entry_rejects_paths_outside_prefix() {
        assert_eq!(Page::from_entry("pages", "README.md"), None);
        assert_eq!(Page::from_entry("pages", "scripts/build.md"), None);
    }

    #[test]
    fn test_from_entry_rejects_files_directly_under_prefix() {
        assert_eq!(Page::from_entry("pages", "pages/index.md"), None);
    }

    #[test]
    fn test_from_entry_rejects_directory_entries() {
        assert_eq!(Page::from_entry("pages", "pages/common/"), None);
    }

    #[test]
    fn test_display_name_common_is_bare() {
        let page = Page::from_entry("pages", "pages/common/ls.md").unwrap();
        assert_eq!(page.display_name(), "ls");
    }

    #[test]
    fn test_display_name_includes_category() {
        let page = Page::from_entry("pages", "pages/git/commit.md").unwrap();
        assert_eq!(page.display_name(), "git commit");
    }

    #[test]
    fn test_index_path() {
        let page = Page::from_entry("pages", "pages/git/commit.md").unwrap();
        assert_eq!(page.index_path(), "git/commit.html");
    }
}
