//! Crafting recipe: what it consumes and which categories it satisfies

use crate::collections::HasId;
use crate::common::split_list;
use crate::ids::PreparationId;

#[derive(Debug, Clone, PartialEq)]
pub struct Preparation {
    id: PreparationId,
    name: String,
    /// Inputs consumed to craft this preparation
    materials: Vec<String>,
    /// Tags this preparation satisfies when used as a material elsewhere
    categories: Vec<String>,
    checked: bool,
}

impl Preparation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PreparationId::new(),
            name: name.into(),
            materials: Vec::new(),
            categories: Vec::new(),
            checked: false,
        }
    }

    /// Reconstruct from stored data
    pub fn from_parts(
        id: PreparationId,
        name: String,
        materials: Vec<String>,
        categories: Vec<String>,
        checked: bool,
    ) -> Self {
        Self {
            id,
            name,
            materials,
            categories,
            checked,
        }
    }

    /// Build from form text; lists are comma separated.
    pub fn from_input(name: &str, materials: &str, categories: &str) -> Self {
        Self::new(name.trim())
            .with_materials(split_list(materials))
            .with_categories(split_list(categories))
    }

    pub fn id(&self) -> &PreparationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn materials(&self) -> &[String] {
        &self.materials
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_materials(mut self, materials: Vec<String>) -> Self {
        self.materials = materials;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn duplicated(&self) -> Self {
        Self {
            id: PreparationId::new(),
            ..self.clone()
        }
    }
}

impl HasId for Preparation {
    type Id = PreparationId;

    fn id(&self) -> &PreparationId {
        &self.id
    }
}
