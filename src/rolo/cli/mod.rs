//! # CLI Layer
//!
//! One possible front end for rolo. It is the only place that knows about the terminal:
//! argument parsing, reading command lines, colours, and exit codes.
//!
//! The library hands back two things, and this layer prints both:
//!
//! - the [`CmdResult`](rolo::api::CmdResult) of each command line, as coloured messages;
//! - model events, read from an `EventBus` subscription. After each command only the
//!   latest pending event is rendered, since every event carries a full snapshot.

mod commands;
mod print;
mod setup;

pub use commands::run;
