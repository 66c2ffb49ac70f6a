//! One controller per table.

use std::collections::HashMap;

use tabledom::Document;

use crate::controller::Controller;
use crate::settings::Settings;

/// Maps table IDs to their controllers.
///
/// Controllers are created on first use and live until removed. New
/// controllers start from the registry's defaults, so changing the defaults
/// only affects tables that have not been touched yet.
#[derive(Debug, Default)]
pub struct Registry {
    defaults: Settings,
    controllers: HashMap<String, Controller>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: Settings) -> Self {
        Self {
            defaults,
            controllers: HashMap::new(),
        }
    }

    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }

    pub fn defaults_mut(&mut self) -> &mut Settings {
        &mut self.defaults
    }

    /// The controller for `table_id`, created if absent.
    pub fn ensure(&mut self, table_id: &str) -> &mut Controller {
        let defaults = &self.defaults;
        self.controllers
            .entry(table_id.to_string())
            .or_insert_with(|| {
                log::trace!("[registry] new controller for {table_id}");
                Controller::with_defaults(table_id, defaults.clone())
            })
    }

    pub fn get(&self, table_id: &str) -> Option<&Controller> {
        self.controllers.get(table_id)
    }

    pub fn get_mut(&mut self, table_id: &str) -> Option<&mut Controller> {
        self.controllers.get_mut(table_id)
    }

    /// Drop the controller for a table that is going away.
    pub fn remove(&mut self, table_id: &str) -> Option<Controller> {
        self.controllers.remove(table_id)
    }

    /// Drop controllers whose table is gone from `doc`. Frozen controllers
    /// are kept, since they hold their detached table themselves.
    pub fn prune(&mut self, doc: &Document) -> usize {
        let before = self.controllers.len();
        self.controllers
            .retain(|id, controller| controller.is_frozen() || doc.contains(id));
        let removed = before - self.controllers.len();
        if removed > 0 {
            log::debug!("[registry] pruned {removed} controllers");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}
