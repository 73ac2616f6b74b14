#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ModeSetError {
    #[error("unknown travel mode name '{name}'")]
    UnknownModeName { name: String },
}
