//! Action-keyword dispatch over a registry of controllers.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};
use tabledom::{Document, Geometry};

use crate::controller::Controller;
use crate::error::{FreezeError, Result};
use crate::registry::Registry;
use crate::settings::ConfigArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Freeze,
    Unfreeze,
    IsFrozen,
    Config,
}

impl Action {
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Freeze => "freeze",
            Self::Unfreeze => "unfreeze",
            Self::IsFrozen => "isFrozen",
            Self::Config => "config",
        }
    }

    /// Whether the action can answer with a value rather than the handle.
    pub const fn returns_value(&self) -> bool {
        matches!(self, Self::IsFrozen | Self::Config)
    }
}

impl FromStr for Action {
    type Err = FreezeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "freeze" => Ok(Self::Freeze),
            "unfreeze" => Ok(Self::Unfreeze),
            "isFrozen" => Ok(Self::IsFrozen),
            "config" => Ok(Self::Config),
            other => Err(FreezeError::UnrecognizedAction(other.to_string())),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// What an invocation hands back.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The action ran for its effect; the caller can keep chaining.
    Handle,
    Frozen(bool),
    /// The value of a setting read through `config`.
    Value(Value),
}

/// The entry point for driving column freezing on a document.
pub struct ColumnFreeze<G: Geometry> {
    registry: Registry,
    geometry: G,
}

impl<G: Geometry> ColumnFreeze<G> {
    pub fn new(geometry: G) -> Self {
        Self::with_registry(Registry::new(), geometry)
    }

    pub fn with_registry(registry: Registry, geometry: G) -> Self {
        Self { registry, geometry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Run `action` on one table.
    ///
    /// With no action keyword the call is a freeze and `args` are its settings.
    pub fn invoke(
        &mut self,
        doc: &mut Document,
        table_id: &str,
        action: Option<&str>,
        args: &[Value],
    ) -> Result<Outcome> {
        let action = match action {
            Some(keyword) => keyword.parse()?,
            None => Action::Freeze,
        };
        log::trace!("[action] {action} on {table_id}");

        let controller = self.registry.ensure(table_id);
        match action {
            Action::Freeze => {
                apply_options(controller, args)?;
                controller.freeze(doc, &self.geometry)?;
                Ok(Outcome::Handle)
            }
            Action::Unfreeze => {
                apply_options(controller, args)?;
                controller.unfreeze(doc)?;
                Ok(Outcome::Handle)
            }
            Action::IsFrozen => Ok(Outcome::Frozen(controller.is_frozen())),
            Action::Config => {
                let args = ConfigArgs::from_values(args)?;
                Ok(controller.config(args)?.map_or(Outcome::Handle, Outcome::Value))
            }
        }
    }

    /// Run `action` on several tables in order.
    ///
    /// Value-returning actions answer with the first table's result; everything
    /// else answers with the handle.
    pub fn invoke_all(
        &mut self,
        doc: &mut Document,
        table_ids: &[&str],
        action: Option<&str>,
        args: &[Value],
    ) -> Result<Outcome> {
        let parsed = match action {
            Some(keyword) => keyword.parse()?,
            None => Action::Freeze,
        };
        let mut first = None;
        for id in table_ids {
            let outcome = self.invoke(doc, id, action, args)?;
            first.get_or_insert(outcome);
        }
        Ok(match first {
            Some(outcome) if parsed.returns_value() => outcome,
            _ => Outcome::Handle,
        })
    }

    pub fn freeze(
        &mut self,
        doc: &mut Document,
        table_id: &str,
        options: Option<&Map<String, Value>>,
    ) -> Result<()> {
        let controller = self.registry.ensure(table_id);
        if let Some(options) = options {
            controller.merge_settings(options)?;
        }
        controller.freeze(doc, &self.geometry)
    }

    pub fn unfreeze(
        &mut self,
        doc: &mut Document,
        table_id: &str,
        options: Option<&Map<String, Value>>,
    ) -> Result<()> {
        let controller = self.registry.ensure(table_id);
        if let Some(options) = options {
            controller.merge_settings(options)?;
        }
        controller.unfreeze(doc)
    }

    pub fn is_frozen(&mut self, table_id: &str) -> bool {
        self.registry.ensure(table_id).is_frozen()
    }

    pub fn config(&mut self, table_id: &str, args: ConfigArgs) -> Result<Option<Value>> {
        self.registry.ensure(table_id).config(args)
    }
}

/// Settings passed along with freeze/unfreeze: nothing, or one record.
fn apply_options(controller: &mut Controller, args: &[Value]) -> Result<()> {
    match args {
        [] | [Value::Null] => {
            controller.config(ConfigArgs::Ensure)?;
            Ok(())
        }
        [Value::Object(record)] => controller.merge_settings(record),
        _ => Err(FreezeError::invalid_argument(
            "expected a settings record or nothing",
        )),
    }
}
