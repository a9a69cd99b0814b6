//! Locale data store with lazy, once-only loading per (locale, dataset) pair.
//!
//! ```text
//!  load(locale, dataset)
//!        │
//!        ▼
//!  cells: Mutex<HashMap<DatasetKey, Arc<OnceLock<..>>>>   (held only to fetch the cell)
//!        │
//!        ▼
//!  OnceLock::get_or_init ── DatasetSource::read ── parse(Layout)
//! ```
//!
//! The map lock is only held long enough to find or create the cell for a
//! pair; the read and parse run inside that pair's `OnceLock`, so loads of
//! unrelated datasets never serialize behind each other, and concurrent first
//! requests for the same pair observe a single read. Failures are cached as
//! well and are not retried.

use crate::{DataError, Distribution};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

/// Pseudo-locale for data that does not vary by region.
pub const GENERIC_LOCALE: &str = "generic";

/// Locale used when none is given.
pub const DEFAULT_LOCALE: &str = "en_US";

/// One row of a row-oriented dataset.
pub type Row = BTreeMap<String, String>;

type LoadResult = Result<Arc<LocaleDataset>, DataError>;
type LoadCell = Arc<OnceLock<LoadResult>>;

// ============================================================================
// Keys and layouts
// ============================================================================

/// Address of one dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatasetKey {
    pub locale: String,
    pub dataset: String,
}

impl DatasetKey {
    pub fn new(locale: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            dataset: dataset.into(),
        }
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.locale, self.dataset)
    }
}

/// Shape of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// JSON object mapping keys to arrays of strings.
    #[default]
    Columns,
    /// JSON array of objects mapping keys to strings.
    Rows,
}

// ============================================================================
// Sources
// ============================================================================

/// Backing storage for dataset files.
pub trait DatasetSource: Send + Sync {
    /// Return the raw content for the pair, or `DatasetNotFound`.
    fn read(&self, locale: &str, dataset: &str) -> Result<String, DataError>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// Reads `<root>/<locale>/<dataset>.json` from the filesystem.
///
/// Dataset ids may contain `/` (e.g. `cars/toyota`), which map onto
/// sub-directories.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path for a pair, `None` if either part would escape the root.
    pub fn path_for(&self, locale: &str, dataset: &str) -> Option<PathBuf> {
        let relative = Path::new(locale).join(format!("{dataset}.json"));
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if escapes {
            return None;
        }
        Some(self.root.join(relative))
    }
}

impl DatasetSource for DirectorySource {
    fn read(&self, locale: &str, dataset: &str) -> Result<String, DataError> {
        let not_found = || DataError::DatasetNotFound {
            locale: locale.to_string(),
            dataset: dataset.to_string(),
        };
        let path = self.path_for(locale, dataset).ok_or_else(not_found)?;

        std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => not_found(),
            _ => DataError::DatasetRead {
                locale: locale.to_string(),
                dataset: dataset.to_string(),
                message: format!("{}: {e}", path.display()),
            },
        })
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

/// In-memory source, mostly for tests and compiled-in data.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<DatasetKey, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the content for a pair.
    pub fn with(
        mut self,
        locale: impl Into<String>,
        dataset: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.insert(locale, dataset, content);
        self
    }

    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        dataset: impl Into<String>,
        content: impl Into<String>,
    ) {
        self.files
            .insert(DatasetKey::new(locale, dataset), content.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl DatasetSource for MemorySource {
    fn read(&self, locale: &str, dataset: &str) -> Result<String, DataError> {
        self.files
            .get(&DatasetKey::new(locale, dataset))
            .cloned()
            .ok_or_else(|| DataError::DatasetNotFound {
                locale: locale.to_string(),
                dataset: dataset.to_string(),
            })
    }

    fn describe(&self) -> String {
        format!("memory ({} files)", self.files.len())
    }
}

// ============================================================================
// Loaded datasets
// ============================================================================

type WeightedResult = Result<Arc<Distribution<String>>, DataError>;

/// Parsed content of one dataset file for one locale. Immutable once loaded.
#[derive(Debug)]
pub struct LocaleDataset {
    locale: String,
    dataset: String,
    layout: Layout,
    tables: HashMap<String, Vec<String>>,
    rows: Vec<Row>,
    /// Parsed weighted columns keyed by (column, separator)
    weighted: Mutex<HashMap<(String, String), WeightedResult>>,
}

impl LocaleDataset {
    /// Parse raw JSON content according to `layout`.
    pub fn parse(
        locale: &str,
        dataset: &str,
        layout: Layout,
        content: &str,
    ) -> Result<Self, DataError> {
        let parse_error = |e: serde_json::Error| DataError::DatasetParse {
            locale: locale.to_string(),
            dataset: dataset.to_string(),
            message: e.to_string(),
        };

        let (tables, rows): (HashMap<String, Vec<String>>, Vec<Row>) = match layout {
            Layout::Columns => (serde_json::from_str(content).map_err(parse_error)?, Vec::new()),
            Layout::Rows => (HashMap::new(), serde_json::from_str(content).map_err(parse_error)?),
        };

        Ok(Self {
            locale: locale.to_string(),
            dataset: dataset.to_string(),
            layout,
            tables,
            rows,
            weighted: Mutex::default(),
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn dataset(&self) -> &str {
        &self.dataset
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Column keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Named column.
    pub fn column(&self, key: &str) -> Result<&[String], DataError> {
        self.tables
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| DataError::MissingKey {
                dataset: self.dataset.clone(),
                key: key.to_string(),
            })
    }

    /// Named column, or an empty slice (logged) when absent.
    pub fn column_or_empty(&self, key: &str) -> &[String] {
        match self.column(key) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!("{e} (locale: {})", self.locale);
                &[]
            }
        }
    }

    /// Rows of a row-oriented dataset; empty for column datasets.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Parse a column of `"item<sep>weight"` strings into a validated
    /// distribution. The result, error included, is cached for the life of
    /// the dataset.
    pub fn weighted(&self, key: &str, sep: &str) -> Result<Arc<Distribution<String>>, DataError> {
        let mut cache = self.weighted.lock().unwrap_or_else(|e| e.into_inner());
        cache
            .entry((key.to_string(), sep.to_string()))
            .or_insert_with(|| {
                self.column(key)
                    .and_then(|items| Distribution::parse_encoded(key, items, sep))
                    .map(Arc::new)
            })
            .clone()
    }
}

// ============================================================================
// Store
// ============================================================================

/// Process-wide cache of loaded datasets.
///
/// Build one at startup, wrap it in an `Arc` and hand it to every generator.
pub struct LocaleStore {
    source: Box<dyn DatasetSource>,
    layouts: HashMap<DatasetKey, Layout>,
    layout_prefixes: Vec<(String, Layout)>,
    fallback_locale: Option<String>,
    cells: Mutex<HashMap<DatasetKey, LoadCell>>,
    reads: AtomicUsize,
}

impl LocaleStore {
    /// Create a store over `source`. All datasets default to
    /// [`Layout::Columns`].
    pub fn new(source: impl DatasetSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            layouts: HashMap::new(),
            layout_prefixes: Vec::new(),
            fallback_locale: None,
            cells: Mutex::new(HashMap::new()),
            reads: AtomicUsize::new(0),
        }
    }

    /// Configure the layout for one exact pair.
    pub fn with_layout(
        mut self,
        locale: impl Into<String>,
        dataset: impl Into<String>,
        layout: Layout,
    ) -> Self {
        self.layouts.insert(DatasetKey::new(locale, dataset), layout);
        self
    }

    /// Configure the layout for every dataset id starting with `prefix`,
    /// in any locale. Exact pairs win over prefixes.
    pub fn with_layout_prefix(mut self, prefix: impl Into<String>, layout: Layout) -> Self {
        self.layout_prefixes.push((prefix.into(), layout));
        self
    }

    /// Locale consulted by [`load_for_locale`](Self::load_for_locale) when
    /// the requested locale has no file for a dataset.
    pub fn with_fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = Some(locale.into());
        self
    }

    pub fn fallback_locale(&self) -> Option<&str> {
        self.fallback_locale.as_deref()
    }

    /// Layout configured for a pair.
    pub fn layout_for(&self, locale: &str, dataset: &str) -> Layout {
        if let Some(layout) = self.layouts.get(&DatasetKey::new(locale, dataset)) {
            return *layout;
        }
        self.layout_prefixes
            .iter()
            .find(|(prefix, _)| dataset.starts_with(prefix.as_str()))
            .map(|(_, layout)| *layout)
            .unwrap_or_default()
    }

    /// Load the exact pair, reading the backing file at most once.
    pub fn load(&self, locale: &str, dataset: &str) -> Result<Arc<LocaleDataset>, DataError> {
        let key = DatasetKey::new(locale, dataset);
        let cell = self.cell(&key);
        cell.get_or_init(|| self.read_and_parse(&key)).clone()
    }

    /// Load a locale-independent dataset.
    pub fn load_generic(&self, dataset: &str) -> Result<Arc<LocaleDataset>, DataError> {
        self.load(GENERIC_LOCALE, dataset)
    }

    /// Load a locale-specific dataset, trying the configured fallback locale
    /// only when the requested one has no backing file.
    pub fn load_for_locale(
        &self,
        locale: &str,
        dataset: &str,
    ) -> Result<Arc<LocaleDataset>, DataError> {
        match (self.load(locale, dataset), self.fallback_locale.as_deref()) {
            (Err(DataError::DatasetNotFound { .. }), Some(fallback)) if fallback != locale => {
                tracing::debug!("Dataset {dataset} missing for {locale}, falling back to {fallback}");
                self.load(fallback, dataset)
            }
            (result, _) => result,
        }
    }

    /// Whether the pair has finished a load attempt (successful or not).
    pub fn is_loaded(&self, locale: &str, dataset: &str) -> bool {
        self.lock_cells()
            .get(&DatasetKey::new(locale, dataset))
            .is_some_and(|cell| cell.get().is_some())
    }

    /// Number of reads issued against the source since creation or the
    /// last [`reset`](Self::reset).
    pub fn load_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Drop every cached dataset so the next request reads again.
    pub fn reset(&self) {
        self.lock_cells().clear();
        self.reads.store(0, Ordering::SeqCst);
        tracing::debug!("Locale store reset");
    }

    fn cell(&self, key: &DatasetKey) -> LoadCell {
        self.lock_cells().entry(key.clone()).or_default().clone()
    }

    fn lock_cells(&self) -> std::sync::MutexGuard<'_, HashMap<DatasetKey, LoadCell>> {
        // The map holds no invariants a panicking holder could break
        self.cells.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn read_and_parse(&self, key: &DatasetKey) -> LoadResult {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let layout = self.layout_for(&key.locale, &key.dataset);

        let result = self
            .source
            .read(&key.locale, &key.dataset)
            .and_then(|content| LocaleDataset::parse(&key.locale, &key.dataset, layout, &content))
            .map(Arc::new);

        match &result {
            Ok(data) => tracing::debug!(
                "Loaded dataset {key} ({layout:?}, {} keys, {} rows) from {}",
                data.tables.len(),
                data.rows.len(),
                self.source.describe()
            ),
            Err(e) => tracing::warn!("Error loading dataset {key}: {e}"),
        }
        result
    }
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("source", &self.source.describe())
            .field("fallback_locale", &self.fallback_locale)
            .field("cached", &self.lock_cells().len())
            .field("reads", &self.load_count())
            .finish()
    }
}
