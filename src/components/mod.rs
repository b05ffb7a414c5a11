mod form_dialog;
mod generic_error;
mod header;
mod schedule_override_delete_dialog;
mod spinner;

pub use form_dialog::FormDialog;
pub use generic_error::GenericError;
pub use header::Header;
pub use schedule_override_delete_dialog::ScheduleOverrideDeleteDialog;
pub use spinner::Spinner;
