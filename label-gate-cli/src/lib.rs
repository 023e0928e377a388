//! # label-gate
//!
//! A continuous-integration gate that fetches a GitHub pull request, compares
//! its labels against a required set and maps the outcome to a process exit
//! code.

pub mod cli;
pub mod clients;
pub mod config;
pub mod consts;
pub mod gate;
pub mod labels;
pub mod utils;
