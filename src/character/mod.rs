//! Character state: the survivor's vitals

pub mod needs;

pub use needs::{NeedStatus, NeedType, Needs, NEED_MAX};

use serde::{Deserialize, Serialize};

/// Snapshot wire shape for the character aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterState {
    pub needs: Needs,
}
