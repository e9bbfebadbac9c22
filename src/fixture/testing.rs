//! In-memory repository used by the fixture core's unit tests.

use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
};

use crate::{
    error::PlatformError,
    fixture::repository::{FixtureEntity, Repository},
    platform::secure_area::SecureArea,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Widget {
    pub id: i32,
    pub code: String,
}

impl FixtureEntity for Widget {
    type Id = i32;

    const KIND: &'static str = "widget";

    fn id(&self) -> i32 {
        self.id
    }

    fn natural_key(&self) -> String {
        self.code.clone()
    }
}

#[derive(Debug, Default)]
pub struct WidgetDraft {
    pub code: String,
}

/// Repository keeping widgets in a map, with hooks to inject failures.
#[derive(Default)]
pub struct MemoryRepository {
    rows: RefCell<BTreeMap<i32, Widget>>,
    next_id: Cell<i32>,
    deleted: RefCell<Vec<i32>>,
    failing_delete: Cell<Option<i32>>,
    save_error: RefCell<Option<PlatformError>>,
    secure_area: Option<SecureArea>,
    secure_area_seen: RefCell<Vec<bool>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose deletions require the secure area, like store views.
    pub fn secured() -> Self {
        Self {
            secure_area: Some(SecureArea::new()),
            ..Self::default()
        }
    }

    pub fn insert(&self, code: &str) -> Widget {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let widget = Widget {
            id,
            code: code.to_string(),
        };
        self.rows.borrow_mut().insert(id, widget.clone());
        widget
    }

    /// Removes a row without recording it as a deletion.
    pub fn remove(&self, id: i32) {
        self.rows.borrow_mut().remove(&id);
    }

    pub fn contains(&self, id: i32) -> bool {
        self.rows.borrow().contains_key(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }

    pub fn deleted(&self) -> Vec<i32> {
        self.deleted.borrow().clone()
    }

    pub fn fail_delete_of(&self, id: i32) {
        self.failing_delete.set(Some(id));
    }

    pub fn fail_next_save(&self, err: PlatformError) {
        *self.save_error.borrow_mut() = Some(err);
    }

    /// Secure area state observed at each delete call.
    pub fn secure_area_seen(&self) -> Vec<bool> {
        self.secure_area_seen.borrow().clone()
    }

    pub fn secure_area_registered(&self) -> bool {
        self.secure_area
            .as_ref()
            .is_some_and(|area| area.is_registered())
    }
}

impl Repository for MemoryRepository {
    type Entity = Widget;
    type Draft = WidgetDraft;

    fn create(&self) -> WidgetDraft {
        WidgetDraft::default()
    }

    async fn save(&self, draft: WidgetDraft) -> Result<Widget, PlatformError> {
        if let Some(err) = self.save_error.borrow_mut().take() {
            return Err(err);
        }
        Ok(self.insert(&draft.code))
    }

    async fn get_by_id(&self, id: i32) -> Result<Widget, PlatformError> {
        self.rows
            .borrow()
            .get(&id)
            .cloned()
            .ok_or(PlatformError::NoSuchEntity {
                kind: Widget::KIND,
                id: id.to_string(),
            })
    }

    async fn delete(&self, entity: &Widget) -> Result<(), PlatformError> {
        if let Some(area) = &self.secure_area {
            self.secure_area_seen.borrow_mut().push(area.is_registered());
        }
        if self.failing_delete.get() == Some(entity.id) {
            return Err(PlatformError::Database(sea_orm::DbErr::Custom(
                "delete refused".to_string(),
            )));
        }
        match self.rows.borrow_mut().remove(&entity.id) {
            Some(_) => {
                self.deleted.borrow_mut().push(entity.id);
                Ok(())
            }
            None => Err(PlatformError::NoSuchEntity {
                kind: Widget::KIND,
                id: entity.id.to_string(),
            }),
        }
    }

    fn secure_area(&self) -> Option<&SecureArea> {
        self.secure_area.as_ref()
    }
}
