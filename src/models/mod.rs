//! Data models for the LMS server

pub mod book;

pub use book::Book;
