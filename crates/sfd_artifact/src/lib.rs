pub mod sql;
pub mod writer;

pub use sql::{filename, render};
pub use writer::{write_artifact, MigrationArtifact};
