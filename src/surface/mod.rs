//! UI boundary — the page the form is rendered on.
//!
//! The controller never touches presentation directly. It reads field values
//! and flips visibility, required-ness and message text through
//! [`FormSurface`]. A browser binding, a terminal or the in-memory
//! [`HeadlessPage`] can sit behind it.

pub mod headless;

pub use headless::HeadlessPage;

/// Element-level operations the form flow needs from its page.
///
/// Calls are synchronous and run to completion; the only suspension point in
/// the flow is the network request.
pub trait FormSurface: Send + Sync {
    /// Current value of the field with element id `id`. Missing fields read
    /// as empty.
    fn field_value(&self, id: &str) -> String;

    /// Show or hide the element `id`.
    fn set_visible(&self, id: &str, visible: bool);

    /// Mark the text field named `field_name` as required or optional.
    fn set_required(&self, field_name: &str, required: bool);

    /// Whether an element with this id exists.
    fn has_element(&self, id: &str) -> bool;

    /// Create an empty element and insert it as child `index` of the form's
    /// page container.
    fn insert_container_child(&self, id: &str, class: &str, index: usize);

    /// Replace the text content of element `id`.
    fn set_text(&self, id: &str, text: &str);

    /// Send the browser to `target`.
    fn navigate(&self, target: &str);
}
