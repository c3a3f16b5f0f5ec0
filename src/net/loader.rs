//! Parallel all-or-nothing loading of the three datasets.

use crate::data::{Dataset, DatasetKind, DatasetSet};

use super::fetch::{build_client, fetch_json, FetchError};

/// Anything that can turn a URL into a dataset tree.
pub trait DatasetSource: Sync {
    fn fetch(&self, url: &str) -> Result<Dataset, FetchError>;
}

/// Dataset source backed by one shared blocking HTTP client.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client()?,
        })
    }
}

impl DatasetSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<Dataset, FetchError> {
        fetch_json(&self.client, url)
    }
}

/// URLs of the three datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetUrls {
    pub kickstarter: String,
    pub movies: String,
    pub videogames: String,
}

impl Default for DatasetUrls {
    fn default() -> Self {
        Self {
            kickstarter: DatasetKind::Kickstarter.url(),
            movies: DatasetKind::Movies.url(),
            videogames: DatasetKind::VideoGames.url(),
        }
    }
}

/// Fatal startup failure: one of the datasets could not be loaded.
#[derive(Debug, Clone)]
pub struct LoadError {
    pub dataset: DatasetKind,
    pub source: FetchError,
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to load {} dataset: {}", self.dataset.info().title, self.source)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Fetch all three datasets concurrently.
///
/// Succeeds only if every fetch succeeds. When several fail, the error
/// reported is the first one in (kickstarter, movies, videogames) order.
pub fn load_all<S: DatasetSource>(source: &S, urls: &DatasetUrls) -> Result<DatasetSet, LoadError> {
    log::info!("Loading 3 datasets");
    let (kickstarter, (movies, videogames)) = rayon::join(
        || source.fetch(&urls.kickstarter),
        || rayon::join(|| source.fetch(&urls.movies), || source.fetch(&urls.videogames)),
    );

    let tag = |dataset: DatasetKind| {
        move |source: FetchError| {
            log::error!("{} fetch failed: {}", dataset.info().title, source);
            LoadError { dataset, source }
        }
    };

    let set = DatasetSet {
        kickstarter: kickstarter.map_err(tag(DatasetKind::Kickstarter))?,
        movies: movies.map_err(tag(DatasetKind::Movies))?,
        videogames: videogames.map_err(tag(DatasetKind::VideoGames))?,
    };
    log::info!(
        "Loaded datasets: kickstarter={} movies={} videogames={} leaves",
        set.kickstarter.leaf_count(),
        set.movies.leaf_count(),
        set.videogames.leaf_count()
    );
    Ok(set)
}
