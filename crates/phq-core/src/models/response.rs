use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::questionnaire::{ITEM_COUNT, MAX_ITEM_POINTS, ResponseLevel};
use crate::error::CoreError;

/// Answers as collected by the form: item index (1..=9) to the selected
/// level, or `None` when the item was left blank.
///
/// Missing keys and explicit `None` values mean the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawAnswers(BTreeMap<u8, Option<ResponseLevel>>);

impl RawAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or clear, with `None`) the selection for one item.
    pub fn set(&mut self, item: u8, level: Option<ResponseLevel>) -> Result<(), CoreError> {
        if !is_item_index(item) {
            return Err(CoreError::InvalidItem(item));
        }
        self.0.insert(item, level);
        Ok(())
    }

    /// The selection for `item`, if one was made.
    pub fn get(&self, item: u8) -> Option<ResponseLevel> {
        self.0.get(&item).copied().flatten()
    }

    /// Every recorded item, blanks included, in item order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Option<ResponseLevel>)> + '_ {
        self.0.iter().map(|(item, level)| (*item, *level))
    }

    /// Number of items 1..=9 that carry a selection.
    pub fn answered_count(&self) -> usize {
        (1..=ITEM_COUNT as u8)
            .filter(|item| self.get(*item).is_some())
            .count()
    }
}

impl FromIterator<(u8, ResponseLevel)> for RawAnswers {
    fn from_iter<I: IntoIterator<Item = (u8, ResponseLevel)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(item, level)| (item, Some(level)))
                .collect(),
        )
    }
}

/// Resolved points for all nine items, in questionnaire order
/// (`as_array()[0]` is item 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "[u8; ITEM_COUNT]")]
#[ts(export)]
pub struct ItemScores([u8; ITEM_COUNT]);

impl ItemScores {
    pub fn from_levels(levels: [ResponseLevel; ITEM_COUNT]) -> Self {
        Self(levels.map(ResponseLevel::points))
    }

    pub fn as_array(&self) -> &[u8; ITEM_COUNT] {
        &self.0
    }

    /// Points for a 1-based item index.
    pub fn item(&self, index: u8) -> Option<u8> {
        if !is_item_index(index) {
            return None;
        }
        self.0.get(usize::from(index) - 1).copied()
    }

    /// Sum of the points at the given 1-based item indices.
    pub fn sum_of(&self, indices: &[u8]) -> u8 {
        indices.iter().filter_map(|i| self.item(*i)).sum()
    }
}

impl TryFrom<[u8; ITEM_COUNT]> for ItemScores {
    type Error = CoreError;

    fn try_from(points: [u8; ITEM_COUNT]) -> Result<Self, Self::Error> {
        for (offset, value) in points.iter().enumerate() {
            if *value > MAX_ITEM_POINTS {
                return Err(CoreError::InvalidPoints {
                    item: offset as u8 + 1,
                    value: *value,
                });
            }
        }
        Ok(Self(points))
    }
}

pub fn is_item_index(item: u8) -> bool {
    (1..=ITEM_COUNT as u8).contains(&item)
}
