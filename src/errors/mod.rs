pub mod provider_error;
pub mod verify_error;

pub use provider_error::ProviderError;
pub use verify_error::VerifyError;
