mod clipboard_writer;
mod text_generator;

pub use clipboard_writer::ClipboardWriter;
pub use text_generator::TextGenerator;
