use crate::utils::error::Result;

/// File access used by both tools. Paths are resolved by the implementation,
/// so tests can point the same code at a scratch directory.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    fn exists(&self, path: &str) -> bool;
}
