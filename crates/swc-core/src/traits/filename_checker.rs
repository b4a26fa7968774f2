/// Checks a reconstruction's filename against a naming convention.
pub trait IFilenameChecker: Send + Sync {
    /// Whether `filename` (base name only, no directories) follows the convention.
    fn is_valid(&self, filename: &str) -> bool;
}
