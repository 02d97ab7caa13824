pub mod dispatcher;
pub mod retry;
pub mod transport;
pub mod validator;

pub use crate::domain::model::{DeliveryOutcome, LogRecord, LogResponse};
pub use crate::domain::ports::Transport;
pub use crate::utils::error::Result;
