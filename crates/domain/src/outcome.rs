//! Authorization outcome extraction.
//!
//! Every inbound API response is reduced to an [`AuthOutcome`] by one
//! strict extraction function, so the invalidation watcher never has to
//! inspect arbitrary response shapes. Two trigger conditions are
//! equivalent: a transport-level unauthorized status, and a success
//! transport whose payload status discriminator signals unauthorized.

/// HTTP status code signalling a rejected credential.
pub const UNAUTHORIZED_STATUS: u16 = 401;

/// Payload status discriminator signalling a rejected credential.
pub const UNAUTHORIZED_CODE: i64 = 401;

/// Payload status discriminators accepted as success. Two conventions
/// are in use by the remote service and both must be honored.
pub const SUCCESS_CODES: [i64; 2] = [0, 200];

/// The authorization outcome of a single API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The credential was accepted (or the response says nothing about it).
    Authorized,
    /// The credential is no longer accepted by the remote service.
    Unauthorized,
}

impl AuthOutcome {
    /// Extracts the outcome from a transport status code and the
    /// payload status discriminator, when one was present.
    #[must_use]
    pub const fn extract(transport_status: u16, payload_code: Option<i64>) -> Self {
        if transport_status == UNAUTHORIZED_STATUS
            || matches!(payload_code, Some(UNAUTHORIZED_CODE))
        {
            Self::Unauthorized
        } else {
            Self::Authorized
        }
    }

    /// Returns true if the credential was rejected.
    #[must_use]
    pub const fn is_unauthorized(self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Returns true if a payload status discriminator indicates success.
///
/// The remote service uses two equivalent success conventions; neither
/// is hardcoded at call sites.
#[must_use]
pub fn is_success_code(code: i64) -> bool {
    SUCCESS_CODES.contains(&code)
}
