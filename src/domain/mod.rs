//! Domain layer: strong types with validation and invariants (no I/O).

mod response;
mod validation;
mod value;

pub use response::{
    ERRMSG_BAD_PUSH_TOKEN, ERRMSG_DUPLICATE, ERRNO_LOCAL, ERRNO_SUCCESS, PushReply, ReplyKind,
};
pub use validation::ValidationError;
pub use value::{MessageBody, MessageTitle, SendKey};
