/// Marker trait for intents: keystrokes that changed a field, a submit
/// request, a response arriving from the lender service.
pub trait Intent: Send + 'static {}
