//! File system pass-through helpers: JSON documents, checksums and
//! directory creation.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

/// Bytes read per call while hashing a file.
pub const CHECKSUM_CHUNK_SIZE: usize = 4096;

/// Reads and deserializes a JSON document.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    log::debug!("reading JSON from {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Serializes `value` as compact JSON, replacing any existing file.
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    log::debug!("writing JSON to {}", path.display());

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// Digest algorithms accepted by [`checksum`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecksumAlgorithm {
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl fmt::Display for ChecksumAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha224 => write!(f, "sha224"),
            Self::Sha256 => write!(f, "sha256"),
            Self::Sha384 => write!(f, "sha384"),
            Self::Sha512 => write!(f, "sha512"),
        }
    }
}

impl FromStr for ChecksumAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Computes the lowercase hex digest of a file's contents.
pub fn checksum(path: impl AsRef<Path>, algorithm: ChecksumAlgorithm) -> Result<String> {
    let path = path.as_ref();
    log::debug!("computing {algorithm} checksum of {}", path.display());

    let file = File::open(path)?;
    match algorithm {
        ChecksumAlgorithm::Sha224 => digest_reader::<Sha224, _>(file),
        ChecksumAlgorithm::Sha256 => digest_reader::<Sha256, _>(file),
        ChecksumAlgorithm::Sha384 => digest_reader::<Sha384, _>(file),
        ChecksumAlgorithm::Sha512 => digest_reader::<Sha512, _>(file),
    }
}

fn digest_reader<D: Digest, R: Read>(mut reader: R) -> Result<String> {
    let mut hasher = D::new();
    let mut chunk = [0u8; CHECKSUM_CHUNK_SIZE];

    loop {
        let read = reader.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        hasher.update(&chunk[..read]);
    }

    Ok(hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect())
}

/// Creates `path` and any missing parents.
///
/// An existing directory is left alone; an existing non-directory is an
/// error.
pub fn create_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }

    log::debug!("creating directory {}", path.display());
    fs::create_dir_all(path)?;
    Ok(())
}
