/// Marker trait for reducer state.
///
/// `Default` is the state a fresh form session starts in; `PartialEq` lets
/// callers detect whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
