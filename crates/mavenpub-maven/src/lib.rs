//! Maven repository protocol for publishing: repository layout, request
//! authentication, checksum sidecars, POM and `maven-metadata.xml`
//! generation, HTTP transfer, and the [`publish::Publisher`] that ties them
//! together.

pub mod auth;
pub mod checksum;
pub mod metadata;
pub mod pom;
pub mod publish;
pub mod repository;
pub mod transport;
mod xml;
