//! Minimal element store standing in for a rendered page

use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One node of the page, addressed by its id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub classes: BTreeSet<String>,
    pub html: String,
    pub value: String,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = html.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn class_name(&self) -> String {
        self.classes.iter().cloned().collect::<Vec<_>>().join(" ")
    }
}

/// Shared page state that view bindings read and patch
///
/// Every mutator is a no-op for ids that are not on the page.
#[derive(Debug, Default)]
pub struct Document {
    elements: Mutex<HashMap<String, Element>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_element(self, id: &str, element: Element) -> Self {
        self.insert(id, element);
        self
    }

    pub fn insert(&self, id: &str, element: Element) {
        self.lock().insert(id.to_string(), element);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<Element> {
        self.lock().get(id).cloned()
    }

    pub fn remove(&self, id: &str) -> Option<Element> {
        self.lock().remove(id)
    }

    pub fn html(&self, id: &str) -> Option<String> {
        self.lock().get(id).map(|e| e.html.clone())
    }

    pub fn value(&self, id: &str) -> Option<String> {
        self.lock().get(id).map(|e| e.value.clone())
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.lock().get(id).is_some_and(|e| e.classes.contains(class))
    }

    pub fn set_html(&self, id: &str, html: impl Into<String>) {
        self.update(id, |e| e.html = html.into());
    }

    pub fn set_value(&self, id: &str, value: impl Into<String>) {
        self.update(id, |e| e.value = value.into());
    }

    pub fn add_class(&self, id: &str, class: &str) {
        self.update(id, |e| {
            e.classes.insert(class.to_string());
        });
    }

    pub fn remove_class(&self, id: &str, class: &str) {
        self.update(id, |e| {
            e.classes.remove(class);
        });
    }

    /// Replaces the whole class list
    pub fn set_class_name(&self, id: &str, class_name: &str) {
        self.update(id, |e| {
            e.classes = class_name.split_whitespace().map(str::to_string).collect();
        });
    }

    fn update(&self, id: &str, f: impl FnOnce(&mut Element)) {
        if let Some(element) = self.lock().get_mut(id) {
            f(element);
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Element>> {
        self.elements.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
