use std::collections::HashSet;

use chrono::Utc;
use log::debug;
use serde::Serialize;

use crate::app_response::AppResponse;
use crate::catalog_config::CatalogConfig;
use crate::catalog_query::{filter_by_category, page_count, paginate};
use crate::category::{CategoryFilter, ModelCategory};
use crate::showcase_model::{ModelDraft, ModelId, ModelRecord};

/// The catalog store: every record, the active category filter and the page
/// cursor.
///
/// The store owns the records outright. Callers mutate it through `&mut self`
/// from whichever event handler triggered the change; reads hand out borrows.
#[derive(Debug, Clone)]
pub struct CatalogState {
    records: Vec<ModelRecord>,
    filter: CategoryFilter,
    page: usize,
    config: CatalogConfig,
}

/// One rendered page of the filtered catalog.
#[derive(Debug, Serialize, PartialEq)]
pub struct PageView<'a> {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_records: usize,
    pub filter: CategoryFilter,
    pub records: Vec<&'a ModelRecord>,
}

impl CatalogState {
    pub fn init(config: CatalogConfig) -> Result<Self, AppResponse> {
        config.validate()?;
        let records = if config.seed_samples {
            sample_records(&config.placeholder_image)
        } else {
            Vec::new()
        };
        Ok(Self::from_parts(config, records))
    }

    /// Builds a store over existing records.
    ///
    /// A record whose id repeats an earlier one is dropped.
    pub fn with_records(
        config: CatalogConfig,
        records: Vec<ModelRecord>,
    ) -> Result<Self, AppResponse> {
        config.validate()?;
        let mut seen = HashSet::with_capacity(records.len());
        let records = records
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id);
                if !fresh {
                    debug!("Dropping record with duplicate id {}", record.id);
                }
                fresh
            })
            .collect();
        Ok(Self::from_parts(config, records))
    }

    fn from_parts(config: CatalogConfig, records: Vec<ModelRecord>) -> Self {
        Self {
            records,
            filter: CategoryFilter::All,
            page: 1,
            config,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Commits `draft` as a new record at the end of the catalog.
    ///
    /// A draft with a blank name or no category is skipped: nothing changes
    /// and the draft keeps its fields. Otherwise the draft is cleared and the
    /// new record returned.
    pub fn add_record(&mut self, draft: &mut ModelDraft) -> Option<&ModelRecord> {
        let category = match draft.category {
            Some(category) if draft.is_complete() => category,
            _ => {
                debug!("Skipping incomplete draft: {:?}", draft);
                return None;
            }
        };

        let record = ModelRecord {
            id: self.fresh_id(),
            name: draft.name.trim().to_string(),
            category,
            description: non_blank(draft.description.take()),
            image_ref: non_blank(draft.image_ref.take())
                .unwrap_or_else(|| self.config.placeholder_image.clone()),
            date_added: Utc::now(),
        };
        draft.clear();

        debug!("Adding record {} ({})", record.id, record.category);
        self.records.push(record);
        self.records.last()
    }

    /// Removes the record with `id`, keeping the others in order.
    ///
    /// Returns `false` when no such record exists.
    pub fn remove_record(&mut self, id: &ModelId) -> bool {
        match self.records.iter().position(|record| record.id == *id) {
            Some(index) => {
                self.records.remove(index);
                debug!("Removed record {id}");
                true
            }
            None => {
                debug!("No record with id {id}; nothing removed");
                false
            }
        }
    }

    pub fn get_by_id(&self, id: &ModelId) -> Option<&ModelRecord> {
        self.records.iter().find(|record| record.id == *id)
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[ModelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn category_filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Switches the active filter and rewinds to the first page.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Moves the cursor. Page `0` means page 1; pages past the end render
    /// empty.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Records passing the active filter.
    pub fn visible_records(&self) -> Vec<&ModelRecord> {
        filter_by_category(&self.records, self.filter)
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.visible_records().len(), self.config.page_size)
    }

    /// The page under the cursor.
    pub fn current_page(&self) -> PageView<'_> {
        let visible = self.visible_records();
        let page_size = self.config.page_size;
        PageView {
            page: self.page,
            page_size,
            total_pages: page_count(visible.len(), page_size),
            total_records: visible.len(),
            filter: self.filter,
            records: paginate(&visible, self.page, page_size).to_vec(),
        }
    }

    /// Drops every record and rewinds the cursor. Returns how many were
    /// removed.
    pub fn clear_all_records(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        self.page = 1;
        removed
    }

    fn fresh_id(&self) -> ModelId {
        loop {
            let id = ModelId::generate();
            if self.get_by_id(&id).is_none() {
                return id;
            }
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// The demo records a fresh showcase starts with.
pub fn sample_records(placeholder_image: &str) -> Vec<ModelRecord> {
    let samples = [
        ("Dragon Model", ModelCategory::Mobs),
        ("Laser Gun", ModelCategory::Guns),
        ("Wizard Staff", ModelCategory::WandsStaffs),
        ("Sword of Light", ModelCategory::Sword),
        ("Witch Hat", ModelCategory::Hats),
        ("Magic Backpack", ModelCategory::Backpack),
        ("Enchanted Table", ModelCategory::Furniture),
    ];
    let now = Utc::now();
    samples
        .into_iter()
        .map(|(name, category)| ModelRecord {
            id: ModelId::generate(),
            name: name.to_string(),
            category,
            description: None,
            image_ref: placeholder_image.to_string(),
            date_added: now,
        })
        .collect()
}
