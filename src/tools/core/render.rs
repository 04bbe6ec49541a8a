use crate::ui::UiElement;

/// Responsible for presenting tool outputs back to the host
pub trait Render: Send + Sync + 'static {
    /// Generate a short status message for logging
    fn status(&self) -> String;

    /// Format the user-facing summary text of the response envelope
    fn render(&self) -> String;

    /// Declarative UI description shown by the host, if any.
    /// By default, tools render no UI.
    fn ui(&self) -> Option<UiElement> {
        None
    }
}
