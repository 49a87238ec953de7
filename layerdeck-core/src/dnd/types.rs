//! Identifier types for the drag-and-drop surface
//!
//! Drag sources and drop targets carry a [`DndId`]: either the key of a
//! container (the master list or a split pane) or a layer id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::LayerId;

/// Key of the master-list container.
pub const SORTABLE_LIST_KEY: &str = "sortablelist";

/// A drop container.
///
/// There is always exactly one master list. Pane containers exist only in
/// split mode, one per pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContainerId {
    /// The master layer list
    SortableList,
    /// A split-map pane, by index
    Pane(usize),
}

impl ContainerId {
    /// Returns the pane index, if this is a pane container.
    #[must_use]
    pub const fn pane_index(self) -> Option<usize> {
        match self {
            Self::SortableList => None,
            Self::Pane(index) => Some(index),
        }
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SortableList => f.write_str(SORTABLE_LIST_KEY),
            Self::Pane(index) => write!(f, "{index}"),
        }
    }
}

impl FromStr for ContainerId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == SORTABLE_LIST_KEY {
            return Ok(Self::SortableList);
        }
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(());
        }
        s.parse::<usize>().map(Self::Pane).map_err(|_| ())
    }
}

impl Serialize for ContainerId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ContainerId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse()
            .map_err(|()| serde::de::Error::custom(format!("invalid container key: {key}")))
    }
}

/// Identifier attached to a drag source or drop target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DndId {
    /// A container itself (e.g. dropping onto an empty pane)
    Container(ContainerId),
    /// A layer item inside some container
    Layer(LayerId),
}

impl DndId {
    /// Parses a raw toolkit id. Container keys take precedence over layer ids.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.parse::<ContainerId>()
            .map_or_else(|()| Self::Layer(LayerId::new(raw)), Self::Container)
    }

    /// Returns the layer id, if this refers to a layer.
    #[must_use]
    pub const fn as_layer(&self) -> Option<&LayerId> {
        match self {
            Self::Layer(id) => Some(id),
            Self::Container(_) => None,
        }
    }
}

impl fmt::Display for DndId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container(container) => container.fmt(f),
            Self::Layer(id) => id.fmt(f),
        }
    }
}

impl From<LayerId> for DndId {
    fn from(id: LayerId) -> Self {
        Self::Layer(id)
    }
}

impl From<ContainerId> for DndId {
    fn from(container: ContainerId) -> Self {
        Self::Container(container)
    }
}
