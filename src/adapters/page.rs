use crate::core::{Element, ElementIds, Page};
use crate::utils::error::{PageError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory page. Clones share the same elements.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    elements: Arc<RwLock<HashMap<String, Element>>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = ids
            .into_iter()
            .map(|id| (id.into(), Element::default()))
            .collect();

        Self {
            elements: Arc::new(RwLock::new(elements)),
        }
    }

    /// 建立含有兩個輸入框與兩個輸出區塊的頁面
    pub fn standard(ids: &ElementIds) -> Self {
        Self::with_elements(ids.all())
    }

    pub async fn insert_element(&self, id: &str) {
        let mut elements = self.elements.write().await;
        elements.entry(id.to_string()).or_default();
    }

    pub async fn set_value(&self, id: &str, value: &str) -> Result<()> {
        let mut elements = self.elements.write().await;
        let element = elements
            .get_mut(id)
            .ok_or_else(|| PageError::MissingElementError { id: id.to_string() })?;
        element.value = value.to_string();
        Ok(())
    }

    pub async fn markup(&self, id: &str) -> Option<String> {
        let elements = self.elements.read().await;
        elements.get(id).map(|element| element.markup.clone())
    }
}

impl Page for MemoryPage {
    async fn read_value(&self, id: &str) -> Result<String> {
        let elements = self.elements.read().await;
        elements
            .get(id)
            .map(|element| element.value.clone())
            .ok_or_else(|| PageError::MissingElementError { id: id.to_string() })
    }

    async fn set_markup(&self, id: &str, markup: &str) -> Result<()> {
        let mut elements = self.elements.write().await;
        let element = elements
            .get_mut(id)
            .ok_or_else(|| PageError::MissingElementError { id: id.to_string() })?;
        element.markup = markup.to_string();
        Ok(())
    }
}
