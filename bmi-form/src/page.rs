use std::collections::HashMap;

use crate::surface::{FieldId, FormSurface, Region, RegionId};

/// In-memory form: two field values and whatever the regions currently hold.
#[derive(Debug, Default)]
pub struct Page {
    fields: HashMap<FieldId, String>,
    regions: HashMap<RegionId, Region>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&mut self, height: &str, weight: &str) {
        self.fields.insert(FieldId::Height, height.to_owned());
        self.fields.insert(FieldId::Weight, weight.to_owned());
    }

    pub fn region(&self, region: RegionId) -> Option<&Region> {
        self.regions.get(&region)
    }
}

impl FormSurface for Page {
    fn field_value(&self, field: FieldId) -> String {
        self.fields.get(&field).cloned().unwrap_or_default()
    }

    fn set_region(&mut self, region: RegionId, content: Region) {
        self.regions.insert(region, content);
    }

    fn clear_region(&mut self, region: RegionId) {
        self.regions.remove(&region);
    }
}
