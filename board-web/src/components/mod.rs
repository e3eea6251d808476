pub(crate) mod error_alert;
pub(crate) mod loading;

pub use error_alert::ErrorAlert;
