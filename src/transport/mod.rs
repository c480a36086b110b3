//! Transport layer: wire-format details (form encoding and JSON decoding).

mod push;

pub use push::{DecodeError, decode_push_json_response, encode_push_form};
