//! # propcore — storage and wire primitives for the server data layer
//!
//! * Bounded containers (`StringList`, `StringMap`, `PropertyMap`) that
//!   encode to a storage column under a 1 MiB ceiling and serialize as
//!   plain JSON on the wire.
//! * `AppError`, a structured error whose user-facing message is rendered
//!   by an installable translator.
//! * `parse_hashtags`, a deterministic hashtag tokenizer.
//! * Identifier helpers (`new_id`, `new_random_string`) and name
//!   validators.
//!
//! ```no_run
//! use propcore::{StringMap, ToColumn, ColumnValue, BINARY_PARAM_KEY};
//!
//! let mut props: StringMap = [("theme", "dark")].into_iter().collect();
//! props.insert(BINARY_PARAM_KEY.into(), "true".into());
//! let flag = props.take_binary_params();
//! let column = props.encode_column(flag).unwrap();
//! assert!(matches!(column, ColumnValue::Bytes(ref b) if b[0] == 0x01));
//! ```

pub mod app_error;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod env;
pub mod errors;
pub mod hashtag;
pub mod id;
pub mod text;
pub mod translate;
pub mod validate;
pub mod value;

pub use app_error::{AppError, WireAppError};
pub use constants::{BINARY_PARAM_KEY, MAX_PROP_SIZE_BYTES, NO_TRANSLATION};
pub use decode::{
    from_column, property_map_from_json, string_list_from_json, string_map_from_json, FromColumn,
};
pub use encode::ToColumn;
pub use env::is_cloud;
pub use errors::{
    CodecError, STATUS_BAD_REQUEST, STATUS_INTERNAL_SERVER_ERROR, STATUS_PAYLOAD_TOO_LARGE,
};
pub use hashtag::parse_hashtags;
pub use id::{is_valid_id, new_id, new_random_string};
pub use text::{clear_mention_tags, sanitize_unicode};
pub use translate::{install_translator, Params, Translator, TranslatorSlot};
pub use validate::{
    is_valid_alpha_num, is_valid_alpha_num_hyphen_underscore,
    is_valid_alpha_num_hyphen_underscore_plus, is_valid_channel_identifier,
};
pub use value::{
    remove_duplicate_strings, BinaryParams, ColumnValue, PropertyMap, StringList, StringMap,
};
