//! Dating data repositories.
//!
//! This module contains repositories for the swipe-and-match vertical. Pages
//! are the swipeable profiles, swipes record one page's verdict on another,
//! and matches record reciprocal likes together with the chat they opened.

pub mod matches;
pub mod page;
pub mod swipe;
