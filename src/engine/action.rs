//! Move payloads received from the transport layer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A request to play the card at `card_index` in the acting player's hand.
///
/// Target selections are optional; which one a card needs depends on its
/// identity (Alchemist and the single-target Spellcasters read
/// `target_index`, the Dragon reads `target_indices`).
///
/// ## Example
///
/// ```
/// use brightcast::PlayRequest;
///
/// let req = PlayRequest::new("Alice", 2).with_target(0);
/// assert_eq!(req.target_index, Some(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRequest {
    /// Acting player.
    pub player_name: String,

    /// Index into the acting player's hand.
    pub card_index: usize,

    /// Single-target selection, when the card wants one.
    #[serde(default)]
    pub target_index: Option<usize>,

    /// Multi-target selection (Dragon: up to 3 board indices).
    #[serde(default)]
    pub target_indices: SmallVec<[usize; 3]>,
}

impl PlayRequest {
    /// Request with no target selection.
    #[must_use]
    pub fn new(player_name: impl Into<String>, card_index: usize) -> Self {
        Self {
            player_name: player_name.into(),
            card_index,
            target_index: None,
            target_indices: SmallVec::new(),
        }
    }

    /// Add a single-target selection (builder pattern).
    #[must_use]
    pub fn with_target(mut self, index: usize) -> Self {
        self.target_index = Some(index);
        self
    }

    /// Add a multi-target selection (builder pattern).
    #[must_use]
    pub fn with_targets(mut self, indices: &[usize]) -> Self {
        self.target_indices = SmallVec::from_slice(indices);
        self
    }
}
