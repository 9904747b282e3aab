use derive_with::With;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// What a policy-driven push does when the queue is already full.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Hand the new element back and leave the queue untouched.
    #[default]
    Reject,
    /// Drop the oldest element to make room for the new one.
    EvictOldest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, With)]
pub struct FixFifoConfig {
    /// Number of slots allocated up front. Must be positive.
    pub capacity: usize,
    pub overflow: OverflowPolicy,
}

impl Default for FixFifoConfig {
    fn default() -> Self {
        FixFifoConfig {
            capacity: 64,
            overflow: OverflowPolicy::Reject,
        }
    }
}
