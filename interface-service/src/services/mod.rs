pub mod providers;

pub use providers::cohere::CohereClient;
pub use providers::LanguageModel;
