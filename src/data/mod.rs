//! Dataset model.
//!
//! The three published datasets share one shape: a named root whose children
//! are categories, whose children are leaves carrying `category` and `value`.
//! Leaf values arrive as JSON strings (`"82.53"`) in the published files, so
//! the decoder accepts both strings and numbers.

use serde::Deserialize;

const DATA_BASE_URL: &str = "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map";

/// One node of a dataset tree, as decoded from JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawDataset")]
pub struct Dataset {
    pub name: String,
    pub children: Vec<Dataset>,
    pub category: String,
    /// Leaf value; `None` on internal nodes. Non-numeric strings decode as 0.
    pub value: Option<f64>,
    /// Leaf value as written in the document, shown to users verbatim
    pub raw_value: Option<String>,
}

impl Dataset {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Names of the direct children, in input order.
    pub fn top_level_names(&self) -> Vec<String> {
        self.children.iter().map(|c| c.name.clone()).collect()
    }

    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(Dataset::leaf_count).sum()
        }
    }
}

#[derive(Deserialize)]
struct RawDataset {
    name: String,
    #[serde(default)]
    children: Vec<Dataset>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    value: Option<RawValue>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(serde_json::Number),
    Text(String),
}

impl RawValue {
    fn number(&self) -> f64 {
        match self {
            RawValue::Number(n) => n.as_f64().unwrap_or(0.0),
            RawValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()).unwrap_or(0.0),
        }
    }

    fn into_text(self) -> String {
        match self {
            RawValue::Number(n) => n.to_string(),
            RawValue::Text(s) => s,
        }
    }
}

impl From<RawDataset> for Dataset {
    fn from(raw: RawDataset) -> Self {
        let value = raw.value.as_ref().map(RawValue::number);
        Self {
            name: raw.name,
            children: raw.children,
            category: raw.category,
            value,
            raw_value: raw.value.map(RawValue::into_text),
        }
    }
}

/// Which of the three datasets is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    VideoGames,
    Kickstarter,
    Movies,
}

/// Static description of a dataset: where it lives and how the header shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetInfo {
    pub url_file: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Id of the navigation link that activates this dataset
    pub link_id: &'static str,
}

impl DatasetKind {
    /// Navigation order of the header links.
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::VideoGames,
        DatasetKind::Kickstarter,
        DatasetKind::Movies,
    ];

    pub fn info(self) -> DatasetInfo {
        match self {
            DatasetKind::Kickstarter => DatasetInfo {
                url_file: "kickstarter-funding-data.json",
                title: "Kickstarter Pledges",
                description: "Top 100 Most Pledged Kickstarter Campaigns Grouped By Category",
                link_id: "kickstarterLink",
            },
            DatasetKind::Movies => DatasetInfo {
                url_file: "movie-data.json",
                title: "Movies Sales",
                description: "Top 100 Highest Grossing Movies Grouped By Genre",
                link_id: "moviesLink",
            },
            DatasetKind::VideoGames => DatasetInfo {
                url_file: "video-game-sales-data.json",
                title: "Video Game Sales",
                description: "Top 100 Most Sold Video Games Grouped by Platform",
                link_id: "videogameLink",
            },
        }
    }

    pub fn url(self) -> String {
        format!("{}/{}", DATA_BASE_URL, self.info().url_file)
    }

    /// Short label used on navigation links.
    pub fn label(self) -> &'static str {
        match self {
            DatasetKind::VideoGames => "Video Game Data Set",
            DatasetKind::Kickstarter => "Kickstarter Data Set",
            DatasetKind::Movies => "Movies Data Set",
        }
    }

    pub fn from_link_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.info().link_id == id)
    }
}

impl Default for DatasetKind {
    fn default() -> Self {
        Self::VideoGames
    }
}

/// The three loaded datasets.
#[derive(Debug, Clone)]
pub struct DatasetSet {
    pub kickstarter: Dataset,
    pub movies: Dataset,
    pub videogames: Dataset,
}

impl DatasetSet {
    pub fn get(&self, kind: DatasetKind) -> &Dataset {
        match kind {
            DatasetKind::VideoGames => &self.videogames,
            DatasetKind::Kickstarter => &self.kickstarter,
            DatasetKind::Movies => &self.movies,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Dataset, DatasetSet};

    fn leaf(name: &str, category: &str, value: f64) -> Dataset {
        Dataset {
            name: name.to_string(),
            children: Vec::new(),
            category: category.to_string(),
            value: Some(value),
            raw_value: Some(value.to_string()),
        }
    }

    fn group(name: &str, children: Vec<Dataset>) -> Dataset {
        Dataset {
            name: name.to_string(),
            children,
            category: String::new(),
            value: None,
            raw_value: None,
        }
    }

    pub fn videogames() -> Dataset {
        group(
            "Video Game Sales Data Top 100",
            vec![
                group(
                    "Wii",
                    vec![
                        leaf("Wii Sports", "Wii", 82.53),
                        leaf("Mario Kart Wii", "Wii", 35.52),
                        leaf("Wii Sports Resort", "Wii", 32.77),
                    ],
                ),
                group(
                    "NES",
                    vec![
                        leaf("Super Mario Bros.", "NES", 40.24),
                        leaf("Duck Hunt", "NES", 28.31),
                    ],
                ),
                group("GB", vec![leaf("PokemonRedBlue", "GB", 31.37), leaf("Tetris", "GB", 30.26)]),
                group("DS", vec![leaf("New Super Mario Bros.", "DS", 30.01)]),
            ],
        )
    }

    pub fn kickstarter() -> Dataset {
        group(
            "Kickstarter",
            vec![
                group(
                    "Product Design",
                    vec![leaf("Pebble Time", "Product Design", 20338986.0), leaf("COOLEST COOLER", "Product Design", 13285226.0)],
                ),
                group("Tabletop Games", vec![leaf("Kingdom Death", "Tabletop Games", 12393139.0)]),
                group("Gaming Hardware", vec![leaf("BigTwoBoxes", "Gaming Hardware", 8596474.0)]),
            ],
        )
    }

    pub fn movies() -> Dataset {
        group(
            "Movies",
            vec![
                group("Action", vec![leaf("Avatar", "Action", 760505847.0), leaf("Jurassic World", "Action", 652177271.0)]),
                group("Drama", vec![leaf("Titanic", "Drama", 658672302.0)]),
                group("Adventure", vec![leaf("Star Wars", "Adventure", 460935665.0)]),
            ],
        )
    }

    pub fn datasets() -> DatasetSet {
        DatasetSet {
            kickstarter: kickstarter(),
            movies: movies(),
            videogames: videogames(),
        }
    }
}
