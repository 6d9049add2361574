// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// One tab in the GUI; also selects the export default directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Overview,
    Parts,
    BrandStats,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrandSelector {
    All,
    One(u32),
    Ids(Vec<u32>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub brands: BrandSelector,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self { brands: BrandSelector::All }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportType {
    SingleFile,
    PerBrand,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    out_path: OutputPath,
    pub include_headers: bool,
    /// Prefix price columns with "R " on export. Base data stays numeric.
    pub show_currency: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            out_path: OutputPath::default(),
            include_headers: false,
            show_currency: false,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();

        match self.export_type {
            ExportType::SingleFile => {
                let stem = self.out_path.file_stem.to_string_lossy();
                let ext = self.format.ext();
                path.push(join!(stem, ".", ext));
            }
            ExportType::PerBrand => { /* directory only */ }
        }
        path
    }

    /// Parse GUI text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();

        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                if let Some(parent) = p.parent() {
                    self.out_path.dir = parent.to_path_buf();
                }
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_os_string();
                }
            }
            ExportType::PerBrand => {
                self.out_path.dir = PathBuf::from(s);
            }
        }
    }

    pub fn delimiter(&self) -> char {
        self.format.delim()
    }

    pub fn current_dir(&self) -> &Path {
        &self.out_path.dir
    }

    /// Default export directory per page/tab.
    pub fn default_dir_for(kind: PageKind) -> PathBuf {
        let sub = match kind {
            PageKind::Overview => DEFAULT_OVERVIEW_SUBDIR,
            PageKind::Parts => DEFAULT_PARTS_SUBDIR,
            PageKind::BrandStats => DEFAULT_BRANDS_SUBDIR,
        };
        PathBuf::from(DEFAULT_OUT_DIR).join(sub)
    }

    pub fn set_default_dir_for_page(&mut self, kind: PageKind) {
        self.out_path.dir = Self::default_dir_for(kind);
    }

    pub fn join_dir_and_filename(dir: &Path, file_name: impl AsRef<Path>) -> PathBuf {
        dir.join(file_name)
    }

    /// True when both DIR and stem are still the untouched defaults for `kind`.
    pub fn is_fully_default_for(&self, kind: PageKind) -> bool {
        self.out_path.dir == Self::default_dir_for(kind)
            && self.out_path.file_stem == OsString::from(DEFAULT_FILE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_PARTS_SUBDIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
