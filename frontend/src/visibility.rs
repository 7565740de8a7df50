use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::error::js_message;

/// Share of a section that must be on screen before it counts as seen.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport from the bottom so sections reveal a little late.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Sections that have been on screen at least once. Only ever grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionVisibility(HashSet<String>);

impl SectionVisibility {
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, id: &str) -> bool {
        self.0.insert(id.to_string())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    pub id: &'a str,
    pub is_intersecting: bool,
}

#[derive(Debug)]
pub struct RevealTracker {
    sections: Vec<Option<String>>,
    attached: bool,
    visible: SectionVisibility,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealTracker {
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            attached: true,
            visible: SectionVisibility::default(),
        }
    }

    pub fn register(&mut self, index: usize, id: impl Into<String>) {
        if self.sections.len() <= index {
            self.sections.resize(index + 1, None);
        }
        self.sections[index] = Some(id.into());
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.sections.iter().flatten().any(|s| s == id)
    }

    /// Applies a batch of observer entries; returns true if anything new was revealed.
    pub fn observe<'a>(&mut self, entries: impl IntoIterator<Item = Intersection<'a>>) -> bool {
        if !self.attached {
            return false;
        }
        let mut changed = false;
        for entry in entries {
            if entry.is_intersecting && self.is_registered(entry.id) {
                changed |= self.visible.insert(entry.id);
            }
        }
        changed
    }

    /// Marks every registered section as seen, for browsers without an observer.
    pub fn reveal_all(&mut self) -> bool {
        if !self.attached {
            return false;
        }
        let ids: Vec<String> = self.sections.iter().flatten().cloned().collect();
        let mut changed = false;
        for id in &ids {
            changed |= self.visible.insert(id);
        }
        changed
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn visible(&self) -> &SectionVisibility {
        &self.visible
    }
}

/// Node refs for each tracked section plus what has been revealed so far.
#[derive(Clone, PartialEq)]
pub struct SectionReveal {
    refs: Rc<Vec<NodeRef>>,
    visible: SectionVisibility,
}

impl SectionReveal {
    pub fn node_ref(&self, index: usize) -> NodeRef {
        self.refs.get(index).cloned().unwrap_or_default()
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.visible.contains(id)
    }
}

fn new_observer(
    callback: &Closure<dyn FnMut(Array, IntersectionObserver)>,
) -> Result<IntersectionObserver, JsValue> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
}

/// Watches the sections rendered with `node_ref(i)` and reveals each one the
/// first time it scrolls into view. `ids[i]` must match the element id of
/// section `i`. The observer is torn down on unmount.
#[hook]
pub fn use_section_reveal(ids: &'static [&'static str]) -> SectionReveal {
    let refs = use_memo(|ids| ids.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ids);
    let visible = use_state(SectionVisibility::default);

    {
        let refs = refs.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = Rc::new(RefCell::new(RevealTracker::new()));
                let mut elements: Vec<Element> = Vec::new();
                for (index, node) in refs.iter().enumerate() {
                    if let Some(element) = node.cast::<Element>() {
                        tracker.borrow_mut().register(index, element.id());
                        elements.push(element);
                    }
                }

                let callback = {
                    let tracker = tracker.clone();
                    let visible = visible.clone();
                    Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                        move |entries: Array, _observer: IntersectionObserver| {
                            let hits: Vec<(String, bool)> = entries
                                .iter()
                                .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
                                .map(|e| (e.target().id(), e.is_intersecting()))
                                .collect();
                            let mut tracker = tracker.borrow_mut();
                            let changed = tracker.observe(hits.iter().map(|(id, hit)| Intersection {
                                id: id.as_str(),
                                is_intersecting: *hit,
                            }));
                            if changed {
                                visible.set(tracker.visible().clone());
                            }
                        },
                    )
                };

                let observer = match new_observer(&callback) {
                    Ok(observer) => {
                        for element in &elements {
                            observer.observe(element);
                        }
                        Some(observer)
                    }
                    Err(err) => {
                        warn!("IntersectionObserver unavailable ({}), showing all sections", js_message(&err));
                        let mut tracker = tracker.borrow_mut();
                        if tracker.reveal_all() {
                            visible.set(tracker.visible().clone());
                        }
                        None
                    }
                };

                move || {
                    if let Some(observer) = observer {
                        for element in &elements {
                            observer.unobserve(element);
                        }
                        observer.disconnect();
                    }
                    tracker.borrow_mut().detach();
                    drop(callback);
                }
            },
            ids,
        );
    }

    SectionReveal {
        refs,
        visible: (*visible).clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str) -> Intersection<'_> {
        Intersection {
            id,
            is_intersecting: true,
        }
    }

    fn leave(id: &str) -> Intersection<'_> {
        Intersection {
            id,
            is_intersecting: false,
        }
    }

    fn tracker() -> RevealTracker {
        let mut tracker = RevealTracker::new();
        for (index, id) in ["greeting", "gallery", "calendar"].iter().enumerate() {
            tracker.register(index, *id);
        }
        tracker
    }

    #[test]
    fn test_first_intersection_reveals() {
        let mut tracker = tracker();
        assert!(tracker.observe([hit("greeting")]));
        assert!(tracker.visible().contains("greeting"));
        assert!(!tracker.visible().contains("gallery"));
    }

    #[test]
    fn test_reveal_is_permanent_and_fires_once() {
        let mut tracker = tracker();
        assert!(tracker.observe([hit("gallery")]));
        assert!(!tracker.observe([leave("gallery")]));
        assert!(!tracker.observe([hit("gallery")]));
        assert!(tracker.visible().contains("gallery"));
        assert_eq!(tracker.visible().len(), 1);
    }

    #[test]
    fn test_visibility_never_shrinks() {
        let mut tracker = tracker();
        let script = [
            vec![hit("greeting"), leave("gallery")],
            vec![leave("greeting"), hit("calendar")],
            vec![leave("calendar"), leave("greeting")],
            vec![hit("gallery")],
            vec![leave("gallery"), leave("calendar"), leave("greeting")],
        ];
        let mut previous = tracker.visible().clone();
        for batch in script {
            tracker.observe(batch);
            let current = tracker.visible().clone();
            for id in ["greeting", "gallery", "calendar"] {
                if previous.contains(id) {
                    assert!(current.contains(id), "{} was hidden again", id);
                }
            }
            previous = current;
        }
        assert_eq!(previous.len(), 3);
    }

    #[test]
    fn test_unregistered_targets_are_ignored() {
        let mut tracker = tracker();
        assert!(!tracker.observe([hit("footer")]));
        assert_eq!(tracker.visible().len(), 0);
    }

    #[test]
    fn test_events_after_detach_do_not_mutate() {
        let mut tracker = tracker();
        tracker.observe([hit("greeting")]);
        tracker.detach();

        assert!(!tracker.observe([hit("calendar")]));
        assert!(!tracker.reveal_all());
        assert!(!tracker.visible().contains("calendar"));
        assert_eq!(tracker.visible().len(), 1);
    }

    #[test]
    fn test_reveal_all_covers_registered_sections() {
        let mut tracker = tracker();
        assert!(tracker.reveal_all());
        assert_eq!(tracker.visible().len(), 3);
    }

    #[test]
    fn test_registration_by_index_overwrites_slot() {
        let mut tracker = RevealTracker::new();
        tracker.register(2, "calendar");
        tracker.register(2, "location");
        assert!(tracker.is_registered("location"));
        assert!(!tracker.is_registered("calendar"));
    }
}
