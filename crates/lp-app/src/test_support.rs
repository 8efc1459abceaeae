//! In-memory stand-ins for the browser ports used across controller tests.

use std::collections::{BTreeSet, HashMap};
use std::sync::Mutex;
use std::time::Duration;

use lp_core::ports::{
    BrowserWindowPort, DomPort, SubmittedForm, TabHandle, TimerPort, TimerTask, UserContextPort,
};
use lp_core::ElementRef;

#[derive(Debug, Default, Clone)]
pub struct FakeElement {
    pub classes: BTreeSet<String>,
    pub styles: HashMap<String, String>,
    pub text: String,
    pub disabled: bool,
}

/// Document holding only the elements a test registers (plus the body).
#[derive(Default)]
pub struct FakeDom {
    elements: Mutex<HashMap<ElementRef, FakeElement>>,
    scrolled: Mutex<Vec<ElementRef>>,
}

impl FakeDom {
    pub fn new() -> Self {
        Self::with_elements(&[])
    }

    pub fn with_elements(elements: &[ElementRef]) -> Self {
        let dom = Self::default();
        {
            let mut map = dom.elements.lock().unwrap();
            map.insert(ElementRef::Body, FakeElement::default());
            for element in elements {
                map.insert(element.clone(), FakeElement::default());
            }
        }
        dom
    }

    pub fn element(&self, element: &ElementRef) -> FakeElement {
        self.elements
            .lock()
            .unwrap()
            .get(element)
            .cloned()
            .unwrap_or_else(|| panic!("no element {element} in fake dom"))
    }

    pub fn classes(&self, element: &ElementRef) -> Vec<String> {
        self.element(element).classes.into_iter().collect()
    }

    pub fn style(&self, element: &ElementRef, property: &str) -> Option<String> {
        self.element(element).styles.get(property).cloned()
    }

    pub fn text(&self, element: &ElementRef) -> String {
        self.element(element).text
    }

    pub fn is_disabled(&self, element: &ElementRef) -> bool {
        self.element(element).disabled
    }

    pub fn scrolled(&self) -> Vec<ElementRef> {
        self.scrolled.lock().unwrap().clone()
    }

    fn with_element<R>(
        &self,
        element: &ElementRef,
        f: impl FnOnce(&mut FakeElement) -> R,
    ) -> Option<R> {
        self.elements.lock().unwrap().get_mut(element).map(f)
    }
}

impl DomPort for FakeDom {
    fn exists(&self, element: &ElementRef) -> bool {
        self.elements.lock().unwrap().contains_key(element)
    }

    fn has_class(&self, element: &ElementRef, class: &str) -> bool {
        self.with_element(element, |e| e.classes.contains(class))
            .unwrap_or(false)
    }

    fn add_class(&self, element: &ElementRef, class: &str) {
        self.with_element(element, |e| e.classes.insert(class.to_string()));
    }

    fn remove_class(&self, element: &ElementRef, class: &str) {
        self.with_element(element, |e| e.classes.remove(class));
    }

    fn toggle_class(&self, element: &ElementRef, class: &str, force: Option<bool>) -> bool {
        self.with_element(element, |e| {
            let present = force.unwrap_or(!e.classes.contains(class));
            if present {
                e.classes.insert(class.to_string());
            } else {
                e.classes.remove(class);
            }
            present
        })
        .unwrap_or(false)
    }

    fn set_style(&self, element: &ElementRef, property: &str, value: &str) {
        self.with_element(element, |e| {
            if value.is_empty() {
                e.styles.remove(property);
            } else {
                e.styles.insert(property.to_string(), value.to_string());
            }
        });
    }

    fn set_text(&self, element: &ElementRef, text: &str) {
        self.with_element(element, |e| e.text = text.to_string());
    }

    fn set_disabled(&self, element: &ElementRef, disabled: bool) {
        self.with_element(element, |e| e.disabled = disabled);
    }

    fn scroll_into_view(&self, element: &ElementRef) -> bool {
        if !self.exists(element) {
            return false;
        }
        self.scrolled.lock().unwrap().push(element.clone());
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeTab {
    pub url: Option<String>,
    pub closed: bool,
}

/// Window recording tabs and redirects.
#[derive(Default)]
pub struct FakeWindow {
    block_popups: bool,
    tabs: Mutex<Vec<FakeTab>>,
    redirects: Mutex<Vec<String>>,
}

impl FakeWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Window whose popup blocker refuses every `window.open`.
    pub fn blocking_popups() -> Self {
        Self {
            block_popups: true,
            ..Self::default()
        }
    }

    pub fn tabs(&self) -> Vec<FakeTab> {
        self.tabs.lock().unwrap().clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }

    /// Simulate the user closing a tab by hand.
    pub fn user_closes(&self, tab: usize) {
        self.tabs.lock().unwrap()[tab].closed = true;
    }

    fn open(&self, url: Option<&str>) -> Option<TabHandle> {
        if self.block_popups {
            return None;
        }
        let mut tabs = self.tabs.lock().unwrap();
        tabs.push(FakeTab {
            url: url.map(str::to_string),
            closed: false,
        });
        Some(TabHandle::new(tabs.len() as u32 - 1))
    }
}

impl BrowserWindowPort for FakeWindow {
    fn open_blank_tab(&self) -> Option<TabHandle> {
        self.open(None)
    }

    fn open_tab(&self, url: &str) -> Option<TabHandle> {
        self.open(Some(url))
    }

    fn navigate_tab(&self, tab: TabHandle, url: &str) -> bool {
        let mut tabs = self.tabs.lock().unwrap();
        match tabs.get_mut(tab.id() as usize) {
            Some(t) if !t.closed => {
                t.url = Some(url.to_string());
                true
            }
            _ => false,
        }
    }

    fn close_tab(&self, tab: TabHandle) {
        if let Some(t) = self.tabs.lock().unwrap().get_mut(tab.id() as usize) {
            t.closed = true;
        }
    }

    fn redirect(&self, path: &str) -> anyhow::Result<()> {
        self.redirects.lock().unwrap().push(path.to_string());
        Ok(())
    }
}

/// Timer that only runs tasks when the test advances it.
#[derive(Default)]
pub struct ManualTimer {
    tasks: Mutex<Vec<(Duration, TimerTask)>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Vec<Duration> {
        self.tasks.lock().unwrap().iter().map(|(d, _)| *d).collect()
    }

    /// Run every task whose delay is at most `elapsed`.
    pub fn fire_due(&self, elapsed: Duration) -> usize {
        let due: Vec<TimerTask> = {
            let mut tasks = self.tasks.lock().unwrap();
            let (due, rest): (Vec<_>, Vec<_>) =
                tasks.drain(..).partition(|(delay, _)| *delay <= elapsed);
            *tasks = rest;
            due.into_iter().map(|(_, task)| task).collect()
        };
        let count = due.len();
        for task in due {
            task();
        }
        count
    }
}

impl TimerPort for ManualTimer {
    fn schedule(&self, delay: Duration, task: TimerTask) {
        self.tasks.lock().unwrap().push((delay, task));
    }
}

pub struct StaticUser(pub Option<String>);

impl UserContextPort for StaticUser {
    fn current_user_id(&self) -> Option<String> {
        self.0.clone()
    }
}

pub struct FakeForm {
    pub valid: bool,
    pub classes: Mutex<Vec<String>>,
}

impl FakeForm {
    pub fn new(valid: bool) -> Self {
        Self {
            valid,
            classes: Mutex::new(Vec::new()),
        }
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.lock().unwrap().clone()
    }
}

impl SubmittedForm for FakeForm {
    fn check_validity(&self) -> bool {
        self.valid
    }

    fn add_class(&self, class: &str) {
        let mut classes = self.classes.lock().unwrap();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }
}
