pub mod pirateship;

pub use pirateship::{write_pirateship_csv, write_pirateship_file};
