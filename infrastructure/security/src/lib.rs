mod salted_hasher;

pub use salted_hasher::SaltedSha256Hasher;
