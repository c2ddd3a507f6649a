pub(crate) mod client;
pub(crate) mod envelope;
pub(crate) mod error;

pub use client::{Client, EvictionHook};
pub use envelope::Reply;
pub use error::{ClientError, LoginFailure, Result as CliClientResult};
