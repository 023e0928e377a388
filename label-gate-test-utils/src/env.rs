//! Environment variable management for testing
//!
//! This module provides a guard that overrides process environment variables
//! for the duration of a test and puts the original values back afterwards.

use std::env;
use std::sync::{Mutex, MutexGuard};

/// Serialises tests that touch the process environment
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Overrides a set of environment variables until dropped
///
/// Only one guard can be alive at a time; creating a second one blocks until
/// the first is dropped, so tests running in parallel threads never observe
/// each other's variables.
pub struct EnvVarGuard {
  /// Original values, restored on drop
  saved: Vec<(String, Option<String>)>,
  _lock: MutexGuard<'static, ()>,
}

impl EnvVarGuard {
  /// Apply the given overrides; `None` removes the variable
  pub fn new(vars: &[(&str, Option<&str>)]) -> Self {
    // A panicking test poisons the lock but leaves nothing half-applied
    let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let mut saved = Vec::with_capacity(vars.len());
    for (name, value) in vars {
      saved.push((name.to_string(), env::var(name).ok()));
      unsafe {
        match value {
          Some(value) => env::set_var(name, value),
          None => env::remove_var(name),
        }
      }
    }

    Self { saved, _lock: lock }
  }

  /// Remove every listed variable
  pub fn cleared(names: &[&str]) -> Self {
    let vars: Vec<(&str, Option<&str>)> = names.iter().map(|name| (*name, None)).collect();
    Self::new(&vars)
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    for (name, original) in self.saved.iter().rev() {
      unsafe {
        match original {
          Some(value) => env::set_var(name, value),
          None => env::remove_var(name),
        }
      }
    }
  }
}
