use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Discord ids are persisted as strings; a stored value that does not parse back
    /// means the row was written by something other than this application.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// The singleton settings row is still missing after an insert-if-absent.
    #[error("Global settings row is missing after creation")]
    MissingGlobalSettings,

    /// A direct ping was requested without a target member.
    #[error("Direct ping for channel {channel_id} has no target member")]
    MissingPingTarget { channel_id: u64 },
}
