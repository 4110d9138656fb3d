mod file_export_writer;

pub use file_export_writer::FileExportWriter;
