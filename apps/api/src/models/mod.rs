pub mod draft;
pub mod profile;

pub use draft::PostDraftRow;
pub use profile::VoiceProfileRow;
