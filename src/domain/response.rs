//! Reply model and response classification.
//!
//! The service literals below are the single source of truth for mapping a
//! parsed reply to an outcome. They are read-only; ServerChan has reported
//! both named failures with `errno` 1024, so classification keys on `errmsg`
//! first and falls back to the numeric code.

/// `errno` reported on a successful push.
pub const ERRNO_SUCCESS: i32 = 0;

/// Sentinel code used in log events for outcomes with no remote code
/// (validation failures, transport failures, cancellation).
pub const ERRNO_LOCAL: i32 = -1;

/// `errmsg` reported for an invalid or revoked send key.
pub const ERRMSG_BAD_PUSH_TOKEN: &str = "bad pushtoken";

/// `errmsg` reported when the same content is pushed again too soon.
/// The service emits this literal in Chinese ("do not send duplicate content").
pub const ERRMSG_DUPLICATE: &str = "不要重复发送同样的内容";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Parsed ServerChan reply body.
///
/// Observed shapes:
/// ```json
/// {"errno":0,"errmsg":"success","dataset":"done"}
/// {"errno":1024,"errmsg":"bad pushtoken"}
/// {"errno":1024,"errmsg":"不要重复发送同样的内容"}
/// ```
pub struct PushReply {
    /// Numeric status code embedded in the body, distinct from the HTTP status.
    pub errno: i32,
    pub errmsg: String,
    pub dataset: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Classification of a [`PushReply`].
pub enum ReplyKind {
    Success,
    BadPushToken,
    DuplicateMessage,
    /// Non-success reply not covered by the named cases.
    Rejected,
}

impl PushReply {
    /// Classify this reply per the service literals.
    ///
    /// `errmsg` is matched before `errno`: the named failures share the
    /// generic 1024 code, so the code alone cannot distinguish them.
    pub fn kind(&self) -> ReplyKind {
        if self.errmsg == ERRMSG_BAD_PUSH_TOKEN {
            return ReplyKind::BadPushToken;
        }
        if self.errmsg == ERRMSG_DUPLICATE {
            return ReplyKind::DuplicateMessage;
        }
        if self.errno != ERRNO_SUCCESS {
            return ReplyKind::Rejected;
        }
        ReplyKind::Success
    }
}
