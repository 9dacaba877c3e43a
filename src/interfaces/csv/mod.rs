pub mod event_reader;
pub mod receipt_writer;
