//! In-memory page used by the terminal runner and by tests.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::form::conditional::ConditionalTargets;
use crate::form::state::FormStep;

use super::FormSurface;

#[derive(Debug, Clone)]
struct Element {
    class: String,
    visible: bool,
    text: String,
}

impl Element {
    fn new(class: &str, visible: bool) -> Self {
        Self {
            class: class.to_string(),
            visible,
            text: String::new(),
        }
    }
}

#[derive(Debug, Default)]
struct PageModel {
    fields: HashMap<String, String>,
    required: HashMap<String, bool>,
    elements: HashMap<String, Element>,
    /// Child ids of the `.form-page` container, in document order.
    container: Vec<String>,
    navigations: Vec<String>,
}

/// A page held entirely in memory.
#[derive(Debug, Default)]
pub struct HeadlessPage {
    inner: Mutex<PageModel>,
}

impl HeadlessPage {
    /// An empty page with no elements.
    pub fn new() -> Self {
        Self::default()
    }

    /// The intake form layout: a title followed by the four page containers
    /// (page 1 visible) and both pairs of conditional groups.
    pub fn intake_form() -> Self {
        let page = Self::new();
        {
            let mut model = page.model();
            model
                .elements
                .insert("form-title".to_string(), Element::new("title", true));
            model.container.push("form-title".to_string());
            for step in FormStep::ALL {
                let id = step.container_id();
                model
                    .elements
                    .insert(id.clone(), Element::new("step", step == FormStep::Basic));
                model.container.push(id);
            }
            for targets in [ConditionalTargets::preference_groups(), ConditionalTargets::field_sets()] {
                for id in [targets.investment_group, targets.incubation_group] {
                    model.elements.insert(id, Element::new("group", true));
                }
            }
        }
        page
    }

    fn model(&self) -> MutexGuard<'_, PageModel> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Type a value into a field.
    pub fn set_field(&self, id: &str, value: &str) {
        self.model().fields.insert(id.to_string(), value.to_string());
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.model().elements.get(id).is_some_and(|e| e.visible)
    }

    pub fn is_required(&self, field_name: &str) -> bool {
        self.model().required.get(field_name).copied().unwrap_or(false)
    }

    /// Text content of element `id`, if it exists.
    pub fn text(&self, id: &str) -> Option<String> {
        self.model().elements.get(id).map(|e| e.text.clone())
    }

    pub fn class_of(&self, id: &str) -> Option<String> {
        self.model().elements.get(id).map(|e| e.class.clone())
    }

    /// Child ids of the page container, in order.
    pub fn container_children(&self) -> Vec<String> {
        self.model().container.clone()
    }

    /// Every navigation requested so far.
    pub fn navigations(&self) -> Vec<String> {
        self.model().navigations.clone()
    }

    /// Pages whose container is visible.
    pub fn visible_pages(&self) -> Vec<FormStep> {
        let model = self.model();
        FormStep::ALL
            .into_iter()
            .filter(|s| {
                model
                    .elements
                    .get(&s.container_id())
                    .is_some_and(|e| e.visible)
            })
            .collect()
    }
}

impl FormSurface for HeadlessPage {
    fn field_value(&self, id: &str) -> String {
        self.model().fields.get(id).cloned().unwrap_or_default()
    }

    fn set_visible(&self, id: &str, visible: bool) {
        if let Some(el) = self.model().elements.get_mut(id) {
            el.visible = visible;
        }
    }

    fn set_required(&self, field_name: &str, required: bool) {
        self.model().required.insert(field_name.to_string(), required);
    }

    fn has_element(&self, id: &str) -> bool {
        self.model().elements.contains_key(id)
    }

    fn insert_container_child(&self, id: &str, class: &str, index: usize) {
        let mut model = self.model();
        let at = index.min(model.container.len());
        model.container.insert(at, id.to_string());
        model.elements.insert(id.to_string(), Element::new(class, true));
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.model().elements.get_mut(id) {
            el.text = text.to_string();
        }
    }

    fn navigate(&self, target: &str) {
        self.model().navigations.push(target.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intake_form_starts_on_first_page() {
        let page = HeadlessPage::intake_form();
        assert_eq!(page.visible_pages(), vec![FormStep::Basic]);
        assert_eq!(
            page.container_children(),
            vec!["form-title", "step-1", "step-2", "step-3", "step-4"]
        );
        assert!(page.has_element("investment_fields"));
        assert!(page.has_element("incubation_info_group"));
    }

    #[test]
    fn missing_fields_read_empty() {
        let page = HeadlessPage::new();
        assert_eq!(page.field_value("name"), "");
        page.set_field("name", "李四");
        assert_eq!(page.field_value("name"), "李四");
    }

    #[test]
    fn insert_clamps_to_container_end() {
        let page = HeadlessPage::new();
        page.insert_container_child("late", "msg", 5);
        assert_eq!(page.container_children(), vec!["late"]);
        assert_eq!(page.class_of("late").as_deref(), Some("msg"));
    }

    #[test]
    fn unknown_elements_are_ignored() {
        let page = HeadlessPage::new();
        page.set_visible("ghost", true);
        page.set_text("ghost", "boo");
        assert!(!page.is_visible("ghost"));
        assert_eq!(page.text("ghost"), None);
    }
}
