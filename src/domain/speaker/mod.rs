pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewSpeaker, NewSpeakerAlias, Speaker, SpeakerAlias};
pub use repository::SpeakerRepository;
pub use services::SpeakerResolver;
pub use value_objects::{AliasId, AliasName, SpeakerId, SpeakerName, SpeakerSlug};
