mod config_error;
mod error_code;
mod input_error;
mod swc_error;

pub use config_error::ConfigError;
pub use error_code::SwcErrorCode;
pub use input_error::{InputError, RecordLocation};
pub use swc_error::{SwcError, SwcResult};
