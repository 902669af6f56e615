//! Velvet is a multi-vertical marketplace backend: private ads with an
//! escrowed offer lifecycle, dating pages with reciprocal matching, VIP
//! subscription pages, livestream channels, events, job listings, and
//! direct messaging, all behind one session-authenticated JSON API.

pub mod model;
pub mod server;
