mod draft;
pub use draft::{compose_message, BookingDialogState, BookingDraft, BookingError, DialogEvent};

mod view;
pub use view::{open_booking, BookingDialog};
