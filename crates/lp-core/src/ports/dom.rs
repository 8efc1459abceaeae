use crate::dom::ElementRef;

/// Query and mutate the current document.
///
/// Operations on an element that does not resolve are no-ops; queries report
/// `false`.
pub trait DomPort: Send + Sync {
    fn exists(&self, element: &ElementRef) -> bool;

    fn has_class(&self, element: &ElementRef, class: &str) -> bool;

    fn add_class(&self, element: &ElementRef, class: &str);

    fn remove_class(&self, element: &ElementRef, class: &str);

    /// `classList.toggle(class, force)`. Returns whether the class is present
    /// afterwards.
    fn toggle_class(&self, element: &ElementRef, class: &str, force: Option<bool>) -> bool;

    /// Set an inline style property. An empty value removes the property.
    fn set_style(&self, element: &ElementRef, property: &str, value: &str);

    fn set_text(&self, element: &ElementRef, text: &str);

    fn set_disabled(&self, element: &ElementRef, disabled: bool);

    /// Smoothly scroll the element into view. Returns `false` if it does not
    /// exist.
    fn scroll_into_view(&self, element: &ElementRef) -> bool;
}

/// A form element at the moment of its `submit` event.
///
/// Handed to the controller by reference for the duration of the handler.
pub trait SubmittedForm {
    /// Native constraint validation (`form.checkValidity()`).
    fn check_validity(&self) -> bool;

    fn add_class(&self, class: &str);
}
