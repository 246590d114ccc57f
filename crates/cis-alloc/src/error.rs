//! Error types for the allocation engine.

use thiserror::Error;

/// Result type alias for allocation operations.
pub type Result<T> = std::result::Result<T, AllocError>;

/// Errors that can occur while allocating camera-interface channels.
///
/// The engine never logs these — it returns them and lets the caller decide
/// user messaging.
#[derive(Debug, Error)]
pub enum AllocError {
    /// The requested pixel/line-rate/phase combination needs more physical
    /// ports than any supported cable topology allows. User-visible; the
    /// caller should prompt to reduce line rate, scan width, or phase count.
    #[error(
        "configuration requires {required} ports, but phase count {phase_count} \
         supports at most {max_allowed} across two cables"
    )]
    TooManyPorts {
        /// Absolute port maximum for this phase count.
        max_allowed: u32,
        /// Phase count whose limit was exceeded.
        phase_count: u8,
        /// Ports the configuration actually needs.
        required: u64,
    },

    /// Non-positive bandwidth, a modulus the achievable lval cannot satisfy,
    /// or an unsupported phase count. A programming/config-table error, not
    /// user-correctable in normal operation.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Reason for failure.
        reason: String,
    },
}

impl AllocError {
    /// Create an invalid configuration error.
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_ports_message_names_all_three_values() {
        let err = AllocError::TooManyPorts {
            max_allowed: 20,
            phase_count: 1,
            required: 21,
        };
        let msg = err.to_string();
        assert!(msg.contains("20"));
        assert!(msg.contains("phase count 1"));
        assert!(msg.contains("21"));
    }
}
