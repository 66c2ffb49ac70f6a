//! The freeze/unfreeze lifecycle of one table.

use serde_json::{Map, Value};
use tabledom::{split_table, Document, Element, Geometry, Selector, Size, Substitution};

use crate::error::{FreezeError, Result};
use crate::settings::{style_map, ConfigArgs, Settings, StyleRecord, WidthKeyword, WidthOverride};
use crate::sync::{self, ColumnWidths};

/// Bookkeeping for a table that is currently frozen.
#[derive(Debug)]
struct Frozen {
    /// Holds the detached original table; the wrapper stands in its place.
    substitution: Substitution,
    fixed_table_id: String,
    scroll_table_id: String,
}

/// Freezes and unfreezes one table.
///
/// The wrapper and its two containers are built once and reused across
/// freeze cycles; the split tables inside them are rebuilt on every freeze.
/// While frozen the wrapper lives in the document and the original table is
/// held here, untouched, until [`Controller::unfreeze`] puts it back.
#[derive(Debug)]
pub struct Controller {
    table_id: String,
    defaults: Settings,
    settings: Option<Settings>,

    wrapper_id: String,
    container_fixed_id: String,
    container_scroll_id: String,
    /// The detached wrapper while unfrozen.
    shell: Option<Element>,
    frozen: Option<Frozen>,
}

impl Controller {
    pub fn new(table_id: impl Into<String>) -> Self {
        Self::with_defaults(table_id, Settings::default())
    }

    /// Create a controller whose settings start out as `defaults`.
    pub fn with_defaults(table_id: impl Into<String>, defaults: Settings) -> Self {
        let shell = build_shell();
        let container_fixed_id = shell.children()[0].id.clone();
        let container_scroll_id = shell.children()[1].id.clone();
        Self {
            table_id: table_id.into(),
            defaults,
            settings: None,
            wrapper_id: shell.id.clone(),
            container_fixed_id,
            container_scroll_id,
            shell: Some(shell),
            frozen: None,
        }
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    pub fn wrapper_id(&self) -> &str {
        &self.wrapper_id
    }

    pub fn container_fixed_id(&self) -> &str {
        &self.container_fixed_id
    }

    pub fn container_scroll_id(&self) -> &str {
        &self.container_scroll_id
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen.is_some()
    }

    /// IDs of the current fixed and scroll tables, while frozen.
    pub fn split_ids(&self) -> Option<(&str, &str)> {
        self.frozen
            .as_ref()
            .map(|f| (f.fixed_table_id.as_str(), f.scroll_table_id.as_str()))
    }

    /// The detached original table, while frozen.
    pub fn detached_table(&self) -> Option<&Element> {
        self.frozen.as_ref().map(|f| f.substitution.original())
    }

    // Settings

    /// Current settings, initialized from the defaults on first access.
    pub fn settings(&mut self) -> &Settings {
        self.settings.get_or_insert_with(|| self.defaults.clone())
    }

    pub fn get_setting(&mut self, key: &str) -> Result<Value> {
        self.settings().get(key)
    }

    pub fn set_setting(&mut self, key: &str, value: Value) -> Result<()> {
        let mut settings = self.settings().clone();
        settings.set(key, value)?;
        self.settings = Some(settings);
        Ok(())
    }

    pub fn merge_settings(&mut self, record: &Map<String, Value>) -> Result<()> {
        let merged = self.settings().merged(record)?;
        self.settings = Some(merged);
        Ok(())
    }

    /// Run a configuration call. Only a get produces a value.
    pub fn config(&mut self, args: ConfigArgs) -> Result<Option<Value>> {
        match args {
            ConfigArgs::Ensure => {
                self.settings();
                Ok(None)
            }
            ConfigArgs::Get(key) => self.get_setting(&key).map(Some),
            ConfigArgs::Set(key, value) => self.set_setting(&key, value).map(|()| None),
            ConfigArgs::Merge(record) => self.merge_settings(&record).map(|()| None),
        }
    }

    // Lifecycle

    /// Replace the table with a freshly split and synchronized pair.
    ///
    /// Any previous freeze is undone first, so calling this repeatedly
    /// rebuilds rather than stacks.
    pub fn freeze(&mut self, doc: &mut Document, geometry: &dyn Geometry) -> Result<()> {
        self.unfreeze(doc)?;

        let settings = self.settings().clone();
        let header_selector = parse_selector(&settings.header_selector)?;
        let row_selector = parse_selector(&settings.row_selector)?;

        if doc.root.id == self.table_id {
            return Err(tabledom::DomError::RootSubstitution.into());
        }
        let table = doc
            .find(&self.table_id)
            .ok_or_else(|| FreezeError::NotInDocument(self.table_id.clone()))?;

        let (mut fixed, mut scroll) = split_table(table, settings.index);

        // Widths come from the original while it is still laid out in place
        let copy_widths = settings.scroll_width != Some(WidthOverride::AUTO);
        let widths = if copy_widths {
            let layout = geometry.measure(&doc.root);
            sync::copy_column_widths(
                &layout,
                table,
                &mut fixed,
                &mut scroll,
                &header_selector,
                settings.index,
            )
        } else {
            ColumnWidths::default()
        };

        fixed.width = table_width(settings.fixed_width, widths.fixed, copy_widths);
        scroll.width = table_width(settings.scroll_width, widths.scroll, copy_widths);
        let scroll_left = match settings.fixed_width {
            Some(WidthOverride::Px(px)) => Some(px),
            Some(WidthOverride::Keyword(WidthKeyword::Auto)) => None,
            None => copy_widths.then_some(widths.fixed),
        };

        let fixed_table_id = fixed.id.clone();
        let scroll_table_id = scroll.id.clone();

        let mut wrapper = self.shell.take().unwrap_or_else(|| self.rebuild_shell());
        self.dress_shell(&mut wrapper, &settings, fixed, scroll, scroll_left);

        let substitution = doc.substitute(&self.table_id, wrapper)?;

        if scroll_left.is_none() {
            // Offset can only be known once the fixed side is laid out
            let layout = geometry.measure(&doc.root);
            let left = layout
                .get(&self.container_fixed_id)
                .map_or(0, |r| r.width);
            if let Some(container) = doc.find_mut(&self.container_scroll_id) {
                container.style.set("left", format!("{left}px"));
            }
        }

        let frozen = self.frozen.insert(Frozen {
            substitution,
            fixed_table_id,
            scroll_table_id,
        });

        // Heights only mean something in the final containers
        let layout = geometry.measure(&doc.root);
        let rows = sync::copy_row_heights(
            doc,
            &layout,
            frozen.substitution.original(),
            &frozen.fixed_table_id,
            &frozen.scroll_table_id,
            &row_selector,
        )?;

        log::debug!(
            "[freeze] {} frozen at column {} ({} rows, scroll offset {:?})",
            self.table_id,
            settings.index,
            rows,
            scroll_left
        );

        Ok(())
    }

    /// Put the original table back where the wrapper is. No-op when not frozen.
    pub fn unfreeze(&mut self, doc: &mut Document) -> Result<()> {
        let Some(frozen) = self.frozen.take() else {
            return Ok(());
        };

        if !doc.contains(&frozen.substitution.replacement_id) {
            let id = frozen.substitution.replacement_id.clone();
            self.frozen = Some(frozen);
            return Err(FreezeError::NotInDocument(id));
        }

        let mut wrapper = doc.restore(frozen.substitution)?;
        for id in [&self.container_fixed_id, &self.container_scroll_id] {
            if let Some(container) = wrapper.find_mut(id) {
                container.take_children();
            }
        }
        self.shell = Some(wrapper);

        log::debug!("[freeze] {} unfrozen", self.table_id);
        Ok(())
    }

    /// Apply current classes and styles to the reused shell and install the
    /// new split tables in it.
    fn dress_shell(
        &self,
        wrapper: &mut Element,
        settings: &Settings,
        fixed: Element,
        scroll: Element,
        scroll_left: Option<u16>,
    ) {
        restyle(wrapper, &settings.wrapper_class, &settings.wrapper_style);

        if let Some(container) = wrapper.find_mut(&self.container_fixed_id) {
            restyle(
                container,
                &settings.container_fixed_class,
                &settings.container_fixed_style,
            );
            *container.children_mut() = vec![fixed];
        }

        if let Some(container) = wrapper.find_mut(&self.container_scroll_id) {
            restyle(
                container,
                &settings.container_scroll_class,
                &settings.container_scroll_style,
            );
            if let Some(left) = scroll_left {
                container.style.set("left", format!("{left}px"));
            }
            *container.children_mut() = vec![scroll];
        }
    }

    /// Recreate the shell under the same IDs. Only needed if a failed freeze
    /// lost the previous one.
    fn rebuild_shell(&self) -> Element {
        log::debug!("[freeze] rebuilding wrapper for {}", self.table_id);
        Element::div()
            .id(self.wrapper_id.clone())
            .child(Element::div().id(self.container_fixed_id.clone()))
            .child(Element::div().id(self.container_scroll_id.clone()))
    }
}

fn build_shell() -> Element {
    Element::div().child(Element::div()).child(Element::div())
}

fn restyle(element: &mut Element, classes: &str, style: &StyleRecord) {
    element.classes.clear();
    element.add_class(classes);
    element.style = style_map(style);
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|source| FreezeError::Selector {
        selector: selector.to_string(),
        source,
    })
}

/// Width to force on a split table: the override verbatim, or the computed
/// total when header widths were copied.
fn table_width(over: Option<WidthOverride>, computed: u16, copied: bool) -> Size {
    match over {
        Some(WidthOverride::Px(px)) => Size::Fixed(px),
        Some(WidthOverride::Keyword(WidthKeyword::Auto)) => Size::Auto,
        None if copied => Size::Fixed(computed),
        None => Size::Auto,
    }
}
