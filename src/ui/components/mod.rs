pub mod empty_message;
pub mod help;
pub mod status;

/// Namespace for small reusable widgets.
pub struct UiComponent;
