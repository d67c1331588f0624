use thiserror::Error;
use ubidisc_core::DecodeError;
use ubidisc_transport::TransportError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("malformed discovery response: {0}")]
    Decode(#[from] DecodeError),
}
