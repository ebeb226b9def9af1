//! Definition for the [`ChillerStatus`] and [`ChillerKind`] types,
//! implemented by enums.

use serde::{Deserialize, Serialize};

/// Represents the operating status of a
/// [`ChillerListing`](super::chiller::ChillerListing).
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum ChillerStatus {
    Available,
    Limited,
    EnRoute,
    Full,
}

/// Fixed chillers stay put; mobile units drive to the farmer.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
pub enum ChillerKind {
    Fixed,
    Mobile,
}
