//! Host page binding and standalone HTML export.
//!
//! The chart is mounted into a host document that must provide six elements
//! by id. `HostPage::bind` checks them up front; `render` splices the header
//! text, the active navigation link and the chart into the template.

use std::path::{Path, PathBuf};

use scraper::{Html, Selector};

use crate::data::DatasetKind;
use crate::engine::HeaderState;
use crate::render::svg::escape;

/// Bundled host page.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../assets/index.html");

pub const LAYOUT_ID: &str = "layout";
pub const TITLE_ID: &str = "title";
pub const DESCRIPTION_ID: &str = "description";

/// Ids the host page must provide.
pub const REQUIRED_IDS: [&str; 6] = [
    LAYOUT_ID,
    TITLE_ID,
    DESCRIPTION_ID,
    "videogameLink",
    "kickstarterLink",
    "moviesLink",
];

const TOOLTIP_MARKUP: &str = r#"<div id="tooltip" style="opacity: 0"></div>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The host page has no element with this id
    MissingElement(&'static str),
    /// The host page could not be used as a template
    Template(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingElement(id) => write!(f, "host page has no element with id '{}'", id),
            ConfigError::Template(msg) => write!(f, "invalid host page template: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug)]
pub struct ExportError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to write {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Byte range of an element's opening tag in the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenTag {
    start: usize,
    /// Offset of the closing `>`
    end: usize,
}

#[derive(Debug, Clone)]
pub struct HostPage {
    template: String,
    tags: Vec<(&'static str, OpenTag)>,
}

impl HostPage {
    /// Validate `html` and remember where each required element opens.
    pub fn bind(html: &str) -> Result<Self, ConfigError> {
        let document = Html::parse_document(html);
        for id in REQUIRED_IDS {
            let selector = Selector::parse(&format!("#{}", id))
                .map_err(|e| ConfigError::Template(format!("selector #{}: {:?}", id, e)))?;
            if document.select(&selector).next().is_none() {
                log::error!("Host page is missing #{}", id);
                return Err(ConfigError::MissingElement(id));
            }
        }

        let mut tags = Vec::with_capacity(REQUIRED_IDS.len());
        for id in REQUIRED_IDS {
            let tag = find_open_tag(html, id).ok_or_else(|| {
                ConfigError::Template(format!("cannot locate the opening tag of #{}", id))
            })?;
            tags.push((id, tag));
        }
        log::debug!("Bound host page ({} bytes)", html.len());

        Ok(Self {
            template: html.to_string(),
            tags,
        })
    }

    /// Datasets of the navigation links, in document order.
    pub fn nav_order(&self) -> Vec<DatasetKind> {
        let mut links: Vec<(usize, DatasetKind)> = self
            .tags
            .iter()
            .filter_map(|(id, tag)| DatasetKind::from_link_id(id).map(|kind| (tag.start, kind)))
            .collect();
        links.sort_by_key(|(start, _)| *start);
        links.into_iter().map(|(_, kind)| kind).collect()
    }

    fn tag(&self, id: &str) -> Option<OpenTag> {
        self.tags.iter().find(|(i, _)| *i == id).map(|(_, t)| *t)
    }

    /// The template with header text, active link, chart and tooltip filled in.
    pub fn render(&self, header: &HeaderState, chart_svg: &str) -> String {
        let mut inserts: Vec<(usize, String)> = Vec::new();

        if let Some(tag) = self.tag(TITLE_ID) {
            inserts.push((tag.end + 1, escape(header.title)));
        }
        if let Some(tag) = self.tag(DESCRIPTION_ID) {
            inserts.push((tag.end + 1, escape(header.description)));
        }
        if let Some(tag) = self.tag(LAYOUT_ID) {
            inserts.push((tag.end + 1, format!("\n{}", chart_svg)));
        }
        if let Some(tag) = self.tag(header.active_link) {
            let open = &self.template[tag.start..tag.end];
            let class = open.find("class=\"").or_else(|| open.find("class='"));
            match class {
                Some(pos) => inserts.push((tag.start + pos + "class=\"".len(), "active ".to_string())),
                None => inserts.push((tag.end, " class=\"active\"".to_string())),
            }
        }
        let body_end = self.template.rfind("</body>").unwrap_or(self.template.len());
        inserts.push((body_end, format!("{}\n", TOOLTIP_MARKUP)));

        // Back to front so earlier offsets stay valid.
        inserts.sort_by(|a, b| b.0.cmp(&a.0));
        let mut out = self.template.clone();
        for (at, text) in inserts {
            out.insert_str(at, &text);
        }
        out
    }
}

/// Locate the opening tag carrying `id`, written with double, single or no
/// quotes.
fn find_open_tag(html: &str, id: &str) -> Option<OpenTag> {
    let bytes = html.as_bytes();
    let at = html.match_indices("id=").map(|(i, _)| i).find(|&i| {
        // Reject matches like data-id=...
        if i > 0 && !bytes[i - 1].is_ascii_whitespace() {
            return false;
        }
        let value = &html[i + 3..];
        match value.as_bytes().first() {
            Some(&q) if q == b'"' || q == b'\'' => {
                value[1..].starts_with(id) && value.as_bytes().get(1 + id.len()) == Some(&q)
            }
            _ => {
                value.starts_with(id)
                    && value
                        .as_bytes()
                        .get(id.len())
                        .map_or(false, |&b| b.is_ascii_whitespace() || b == b'>' || b == b'/')
            }
        }
    })?;
    let start = html[..at].rfind('<')?;
    let end = at + html[at..].find('>')?;
    Some(OpenTag { start, end })
}

/// Write an exported page to `path`.
pub fn write_page(path: impl AsRef<Path>, html: &str) -> Result<(), ExportError> {
    let path = path.as_ref();
    std::fs::write(path, html).map_err(|source| ExportError {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Exported chart to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(kind: DatasetKind) -> HeaderState {
        HeaderState::for_dataset(kind)
    }

    #[test]
    fn bundled_template_binds() {
        assert!(HostPage::bind(DEFAULT_TEMPLATE).is_ok());
    }

    #[test]
    fn missing_id_is_reported_by_name() {
        let html = DEFAULT_TEMPLATE.replace("id=\"moviesLink\"", "id=\"films\"");
        assert_eq!(
            HostPage::bind(&html).unwrap_err(),
            ConfigError::MissingElement("moviesLink")
        );

        let html = DEFAULT_TEMPLATE.replace("<div id=\"layout\"></div>", "");
        assert_eq!(HostPage::bind(&html).unwrap_err(), ConfigError::MissingElement("layout"));
    }

    #[test]
    fn render_fills_header_and_marks_one_link() {
        let page = HostPage::bind(DEFAULT_TEMPLATE).unwrap();
        let out = page.render(&header(DatasetKind::Movies), r#"<svg id="chart"></svg>"#);
        let doc = Html::parse_document(&out);

        let text = |sel: &str| {
            let s = Selector::parse(sel).unwrap();
            doc.select(&s).next().map(|e| e.text().collect::<String>()).unwrap_or_default()
        };
        assert_eq!(text("#title"), "Movies Sales");
        assert_eq!(text("#description"), "Top 100 Highest Grossing Movies Grouped By Genre");

        let active = Selector::parse("a.active").unwrap();
        let ids: Vec<&str> = doc.select(&active).filter_map(|e| e.value().id()).collect();
        assert_eq!(ids, ["moviesLink"]);

        let layout = Selector::parse("#layout").unwrap();
        let inner = doc.select(&layout).next().unwrap().inner_html();
        assert!(inner.contains("chart"));

        let tooltip = Selector::parse("#tooltip").unwrap();
        assert_eq!(doc.select(&tooltip).count(), 1);
    }

    #[test]
    fn existing_class_attribute_is_extended() {
        let page = HostPage::bind(DEFAULT_TEMPLATE).unwrap();
        let out = page.render(&header(DatasetKind::Kickstarter), "");
        assert!(out.contains(r#"id="kickstarterLink" class="active nav""#));
        assert_eq!(out.matches("class=\"active").count(), 1);
    }

    #[test]
    fn header_text_is_escaped() {
        let page = HostPage::bind(DEFAULT_TEMPLATE).unwrap();
        let state = HeaderState {
            title: "A < B",
            description: "",
            active_link: "videogameLink",
        };
        assert!(page.render(&state, "").contains("<h1 id=\"title\">A &lt; B</h1>"));
    }

    #[test]
    fn write_page_reports_path() {
        let err = write_page("/nonexistent-dir/treemap.html", "<html></html>").unwrap_err();
        assert!(err.to_string().contains("/nonexistent-dir/treemap.html"));
    }

    #[test]
    fn single_quoted_and_bare_ids_are_spliced() {
        let html = DEFAULT_TEMPLATE
            .replace(r#"<h1 id="title">"#, "<h1 id='title'>")
            .replace(r#"<div id="layout">"#, "<div id=layout>")
            .replace(r#"id="moviesLink""#, "id='moviesLink' class='nav'");
        let page = HostPage::bind(&html).unwrap();
        let out = page.render(&header(DatasetKind::Movies), r#"<svg id="chart"></svg>"#);
        assert!(out.contains("<h1 id='title'>Movies Sales</h1>"));
        assert!(out.contains("<div id=layout>\n<svg id=\"chart\">"));
        assert!(out.contains("id='moviesLink' class='active nav'"));
    }

    #[test]
    fn nav_order_follows_the_document() {
        let page = HostPage::bind(DEFAULT_TEMPLATE).unwrap();
        assert_eq!(
            page.nav_order(),
            [DatasetKind::VideoGames, DatasetKind::Movies, DatasetKind::Kickstarter]
        );
    }
}
