// Hash algorithm module
// Provides the algorithm registry and resettable per-worker hash state

use super::error::HashRenameError;

use blake2::Blake2b512;
use md5::Md5;
use sha1::Sha1;
use sha2::digest::{Digest, FixedOutputReset};
use sha2::{Sha256, Sha512, Sha512_256};
use sha3::Sha3_256;

/// Trait for hash state owned by a single worker
///
/// The state is reused across files: `finalize_reset` hands out the digest
/// and leaves the hasher ready for the next file.
pub trait Hasher: Send {
    /// Update the hasher with new data
    fn update(&mut self, data: &[u8]);

    /// Return the digest of everything fed so far and reset the state
    fn finalize_reset(&mut self) -> Vec<u8>;

    /// Discard any partially-consumed input
    fn reset(&mut self);

    /// Get the output size in bytes
    fn output_size(&self) -> usize;
}

/// Adapter for every RustCrypto `Digest` implementation
pub struct DigestHasher<D>(D);

impl<D> Hasher for DigestHasher<D>
where
    D: Digest + FixedOutputReset + Send,
{
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    fn finalize_reset(&mut self) -> Vec<u8> {
        Digest::finalize_reset(&mut self.0).to_vec()
    }

    fn reset(&mut self) {
        Digest::reset(&mut self.0);
    }

    fn output_size(&self) -> usize {
        <D as Digest>::output_size()
    }
}

// BLAKE3 has its own hasher type rather than a Digest impl
pub struct Blake3Hasher(blake3::Hasher);

impl Hasher for Blake3Hasher {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize_reset(&mut self) -> Vec<u8> {
        let digest = self.0.finalize().as_bytes().to_vec();
        self.0.reset();
        digest
    }

    fn reset(&mut self) {
        self.0.reset();
    }

    fn output_size(&self) -> usize {
        blake3::OUT_LEN
    }
}

/// Supported hash algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    #[default]
    Sha512_256,
    Sha512,
    Sha3_256,
    Blake2b,
    Blake3,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 8] = [
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha512_256,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Blake2b,
        HashAlgorithm::Blake3,
    ];

    /// Canonical configuration name
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512_256 => "sha512_256",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Blake2b => "blake2b",
            HashAlgorithm::Blake3 => "blake3",
        }
    }

    /// Digest length in bytes
    pub fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256
            | HashAlgorithm::Sha512_256
            | HashAlgorithm::Sha3_256
            | HashAlgorithm::Blake3 => 32,
            HashAlgorithm::Sha512 | HashAlgorithm::Blake2b => 64,
        }
    }

    /// Whether the algorithm is still considered collision resistant
    pub fn collision_resistant(self) -> bool {
        !matches!(self, HashAlgorithm::Md5 | HashAlgorithm::Sha1)
    }

    /// Build a fresh hash state for one worker
    pub fn new_hasher(self) -> Box<dyn Hasher> {
        match self {
            HashAlgorithm::Md5 => Box::new(DigestHasher(Md5::new())),
            HashAlgorithm::Sha1 => Box::new(DigestHasher(Sha1::new())),
            HashAlgorithm::Sha256 => Box::new(DigestHasher(Sha256::new())),
            HashAlgorithm::Sha512_256 => Box::new(DigestHasher(Sha512_256::new())),
            HashAlgorithm::Sha512 => Box::new(DigestHasher(Sha512::new())),
            HashAlgorithm::Sha3_256 => Box::new(DigestHasher(Sha3_256::new())),
            HashAlgorithm::Blake2b => Box::new(DigestHasher(Blake2b512::new())),
            HashAlgorithm::Blake3 => Box::new(Blake3Hasher(blake3::Hasher::new())),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = HashRenameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashRegistry::get(s)
    }
}

/// Information about a hash algorithm
#[derive(Debug, Clone)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub output_bits: usize,
    pub cryptographic: bool,
}

/// Registry for hash algorithms
pub struct HashRegistry;

impl HashRegistry {
    /// Look up an algorithm by its configuration name
    ///
    /// Matching ignores case and treats `-` and `_` alike, so `SHA512-256`
    /// and `sha512_256` name the same algorithm.
    pub fn get(name: &str) -> Result<HashAlgorithm, HashRenameError> {
        let normalized = name.trim().to_lowercase().replace('-', "_");

        match normalized.as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" | "sha_1" => Ok(HashAlgorithm::Sha1),
            "sha256" | "sha_256" => Ok(HashAlgorithm::Sha256),
            "sha512_256" => Ok(HashAlgorithm::Sha512_256),
            "sha512" | "sha_512" => Ok(HashAlgorithm::Sha512),
            "sha3_256" => Ok(HashAlgorithm::Sha3_256),
            "blake2b" | "blake2b_512" => Ok(HashAlgorithm::Blake2b),
            "blake3" => Ok(HashAlgorithm::Blake3),
            _ => Err(HashRenameError::UnsupportedAlgorithm {
                algorithm: name.to_string(),
            }),
        }
    }

    /// List all available hash algorithms
    pub fn list_algorithms() -> Vec<AlgorithmInfo> {
        HashAlgorithm::ALL
            .iter()
            .map(|alg| AlgorithmInfo {
                name: alg.name(),
                output_bits: alg.digest_len() * 8,
                cryptographic: alg.collision_resistant(),
            })
            .collect()
    }
}

/// Convert bytes to a lowercase hexadecimal string
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

// Tests moved to tests/hash/hash_tests.rs
