use async_trait::async_trait;
use std::sync::Mutex;

use crate::errors::CoreError;
use crate::models::portfolio::PortfolioEntity;
use super::traits::PortfolioStore;

/// Holdings kept in process memory, in insertion order.
///
/// Update rules: an existing holding is overwritten when the new amount is
/// positive and removed otherwise; an unknown coin is appended.
#[derive(Debug, Default)]
pub struct InMemoryPortfolioStore {
    entities: Mutex<Vec<PortfolioEntity>>,
}

impl InMemoryPortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a set of existing holdings.
    pub fn with_entities(entities: Vec<PortfolioEntity>) -> Self {
        Self {
            entities: Mutex::new(entities),
        }
    }

    /// Number of saved holdings.
    pub fn len(&self) -> usize {
        self.entities.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PortfolioStore for InMemoryPortfolioStore {
    async fn saved_entities(&self) -> Result<Vec<PortfolioEntity>, CoreError> {
        let entities = self.entities.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entities.clone())
    }

    async fn update_holding(&self, coin_id: &str, amount: f64) -> Result<(), CoreError> {
        let mut entities = self.entities.lock().unwrap_or_else(|e| e.into_inner());
        match entities.iter().position(|e| e.coin_id == coin_id) {
            Some(idx) if amount > 0.0 => entities[idx].amount = amount,
            Some(idx) => {
                entities.remove(idx);
            }
            None => entities.push(PortfolioEntity::new(coin_id, amount)),
        }
        Ok(())
    }
}
