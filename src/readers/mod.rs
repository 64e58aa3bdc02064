pub mod objective_reader;

pub use objective_reader::ObjectiveReader;
