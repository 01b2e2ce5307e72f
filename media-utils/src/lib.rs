pub mod crypto;
pub mod error;
pub mod filename;
pub mod slug;
pub mod time;

pub use crypto::{FilenameHasher, HashAlgorithm, hashed_filename, track_hash};
pub use error::UtilError;
pub use filename::{is_audio_filename, split_extension};
pub use slug::track_slug;
pub use time::{HumanDuration, format_duration, try_format_duration};
