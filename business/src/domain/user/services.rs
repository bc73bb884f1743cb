/// Password hashing service consumed by the auth use cases. The concrete
/// scheme lives in infrastructure.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> String;
    fn verify(&self, password: &str, stored: &str) -> bool;
}
