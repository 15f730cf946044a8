/// Rule registration errors.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Rule names prefix signal ids, so they must be unique per extractor.
    #[error("rule already registered: {name}")]
    DuplicateRule { name: String },
}
