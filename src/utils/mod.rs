pub mod file_parsing;
