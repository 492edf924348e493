//! Java toolchain support: find installed JDKs and check them against the
//! `[toolchain]` requirement of a project.

pub mod jdk;
