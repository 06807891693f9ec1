pub mod configuration;
pub mod error;
pub mod parser;
pub mod prompt;
pub mod reply;
pub mod request;
pub mod section;
pub mod tone;

pub use configuration::{AppConfig, GeminiApiConfig};
pub use error::AppError;
pub use parser::{SECTION_DELIMITER, parse, strip_header};
pub use prompt::compose;
pub use reply::{AgentReply, DEGRADED_GUIDE, DEGRADED_SUBJECT, ParseNotice};
pub use request::{EmailRequest, SenderIdentity};
pub use section::SectionKind;
pub use tone::Tone;
