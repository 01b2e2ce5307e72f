use std::str::FromStr;

use chrono::{DateTime, Utc};
use hex::ToHex;
use serde::Deserialize;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::{error::UtilError, filename::split_extension, time::nanos_stamp};

/// Shortest digest prefix a truncated name may use.
pub const MIN_HASH_LEN: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Sha1,
    #[default]
    Sha256,
}

impl HashAlgorithm {
    pub fn hex_digest(self, data: &[u8]) -> String {
        match self {
            HashAlgorithm::Sha1 => Sha1::digest(data).encode_hex(),
            HashAlgorithm::Sha256 => Sha256::digest(data).encode_hex(),
        }
    }

    /// Length of the hex encoded digest.
    pub fn hex_len(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Sha256 => 64,
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            _ => Err(UtilError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Builds storage names for uploads: the base name is replaced by a digest of
/// itself and the upload instant, the extension is kept as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilenameHasher {
    pub algorithm: HashAlgorithm,
    pub hash_len: Option<usize>,
}

impl FilenameHasher {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            hash_len: None,
        }
    }

    /// Truncates generated digests to `hash_len` hex chars, never fewer than
    /// [`MIN_HASH_LEN`].
    pub fn with_hash_len(mut self, hash_len: usize) -> Self {
        self.hash_len = Some(hash_len);
        self
    }

    pub fn hash(&self, filename: &str) -> String {
        self.hash_at(filename, Utc::now())
    }

    pub fn hash_at(&self, filename: &str, at: DateTime<Utc>) -> String {
        let (base, extension) = split_extension(filename);

        // separator keeps `take1` + `700...` apart from `take` + `1700...`
        let seed = format!("{} {}", base, nanos_stamp(at));

        let mut digest = self.algorithm.hex_digest(seed.as_bytes());
        if let Some(len) = self.hash_len {
            digest.truncate(len.clamp(MIN_HASH_LEN, self.algorithm.hex_len()));
        }

        let hashed = format!("{}{}", digest, extension.unwrap_or_default());
        debug!("Hashed filename {:?} -> {}", filename, hashed);
        hashed
    }
}

pub fn hashed_filename(filename: &str) -> String {
    FilenameHasher::default().hash(filename)
}

pub fn track_hash(title: &str, user_id: u64) -> String {
    track_hash_at(title, user_id, Utc::now())
}

pub fn track_hash_at(title: &str, user_id: u64, at: DateTime<Utc>) -> String {
    let seed = format!("{} {} {}", title, nanos_stamp(at), user_id);
    HashAlgorithm::Sha1.hex_digest(seed.as_bytes())
}
