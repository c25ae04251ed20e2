//! # tldr-docset
//!
//! Converts the [tldr-pages](https://tldr.sh) corpus of command-usage
//! markdown into an offline, searchable Dash-style docset.
//!
//! The whole tool is one linear pipeline:
//!
//! ```text
//! corpus zip  ──▶  page filter  ──▶  markdown → HTML  ──▶  output tree
//! (remote fetch    (prefix +         (+ placeholder       (+ search index,
//!  or local dir)    .md entries)      rewriting)           landing page,
//!                                                          assets, tar)
//! ```
//!
//! The library is UI-agnostic: it takes plain arguments, returns
//! `Result` values and a typed [`generate::Report`], and never touches
//! stdout/stderr or the process exit code. Progress is surfaced through a
//! callback so the binary decides how (and whether) to print it. The CLI
//! in `main.rs`/`args.rs` is a thin client over [`generate::run`].
//!
//! ## Module Overview
//!
//! - [`generate`]: the orchestrator, one function running the pipeline
//! - [`source`]: corpus loading (HTTP fetch or local directory packaging)
//! - [`page`]: archive-entry filtering and the display-name rule
//! - [`render`]: markdown rendering and the `{{placeholder}}` rewrite
//! - [`index`]: the SQLite search index (`docSet.dsidx`)
//! - [`docset`]: output-tree layout, landing page, assets, tar packaging
//! - [`config`]: optional JSON run configuration
//! - [`error`]: error types

pub mod config;
pub mod docset;
pub mod error;
pub mod generate;
pub mod index;
pub mod page;
pub mod render;
pub mod source;
