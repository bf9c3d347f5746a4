pub mod create;
pub mod delete;
pub mod moderate;
pub mod relations;
pub mod service;
pub mod update;

pub use create::CreateQuoteCommand;
pub use delete::DeleteQuoteCommand;
pub use moderate::{ToggleFeaturedCommand, ToggleVerifiedCommand};
pub use relations::SourceInput;
pub use service::QuoteCommandService;
pub use update::UpdateQuoteCommand;
