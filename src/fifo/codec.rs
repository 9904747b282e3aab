use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::FixFifo;
use crate::config::{FixFifoConfig, OverflowPolicy};

// Wire form keeps logical order and overflow policy; cursors are rebuilt on decode.
#[derive(Serialize)]
struct FixFifoRef<'a, T> {
    capacity: usize,
    overflow: OverflowPolicy,
    items: Vec<&'a T>,
}

#[derive(Deserialize)]
struct FixFifoOwned<T> {
    capacity: usize,
    #[serde(default)]
    overflow: OverflowPolicy,
    items: Vec<T>,
}

impl<T: Serialize> Serialize for FixFifo<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FixFifoRef {
            capacity: self.capacity(),
            overflow: self.overflow_policy(),
            items: self.iter().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for FixFifo<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let FixFifoOwned {
            capacity,
            overflow,
            items,
        } = FixFifoOwned::deserialize(deserializer)?;
        if items.len() > capacity {
            return Err(D::Error::custom(format!(
                "{} items exceed capacity {}",
                items.len(),
                capacity
            )));
        }
        let config = FixFifoConfig::default()
            .with_capacity(capacity)
            .with_overflow(overflow);
        let mut fifo = FixFifo::from_config(config).map_err(D::Error::custom)?;
        for item in items {
            fifo.push_back(item);
        }
        Ok(fifo)
    }
}
