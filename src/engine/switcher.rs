//! Dataset navigation state.

use crate::data::DatasetKind;

/// Header text and navigation highlight for the active dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderState {
    pub title: &'static str,
    pub description: &'static str,
    /// Id of the single highlighted navigation link
    pub active_link: &'static str,
}

impl HeaderState {
    pub fn for_dataset(kind: DatasetKind) -> Self {
        let info = kind.info();
        Self {
            title: info.title,
            description: info.description,
            active_link: info.link_id,
        }
    }

    pub fn is_active(&self, link_id: &str) -> bool {
        self.active_link == link_id
    }
}

/// Which dataset is active. Exactly one at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSwitcher {
    active: DatasetKind,
    header: HeaderState,
}

impl DatasetSwitcher {
    pub fn new(initial: DatasetKind) -> Self {
        Self {
            active: initial,
            header: HeaderState::for_dataset(initial),
        }
    }

    pub fn active(&self) -> DatasetKind {
        self.active
    }

    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    /// Make `kind` the active dataset. Returns whether it changed.
    pub fn activate(&mut self, kind: DatasetKind) -> bool {
        let changed = self.active != kind;
        self.active = kind;
        self.header = HeaderState::for_dataset(kind);
        changed
    }
}

impl Default for DatasetSwitcher {
    fn default() -> Self {
        Self::new(DatasetKind::default())
    }
}
