//! Library for foodorders, an application for recording food orders and
//! reporting on what has been sold.

pub mod config;
pub mod configrefs;
pub mod db;
pub mod report;
pub mod types;
