//! Domain layer - value types, drafts and the editing lifecycle

pub mod decoder;
pub mod duration;
pub mod edit;
pub mod render;
pub mod session;
pub mod set;
pub mod value;

pub use decoder::decode;
pub use duration::{parse_digit_input, Duration, DurationDraft, DurationField};
pub use edit::{Draft, EditController, EditValue};
pub use render::{Control, DigitControl, Renderable, SetItemControl};
pub use session::{EditingSession, SessionState};
pub use value::{parse_number_input, Canonical, Value, ValueType};
