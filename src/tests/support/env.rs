use std::env;
use std::sync::{Mutex, MutexGuard};

// The process environment is shared by every test thread.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Holds the environment lock, applies the given variables (`None` removes)
/// and restores the previous values on drop.
pub struct ScopedEnv {
    saved: Vec<(String, Option<String>)>,
    _guard: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    pub fn lock(vars: &[(&str, Option<&str>)]) -> Self {
        let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let saved = vars
            .iter()
            .map(|(key, value)| {
                let previous = env::var(key).ok();
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
                (key.to_string(), previous)
            })
            .collect();

        Self {
            saved,
            _guard: guard,
        }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, previous) in &self.saved {
            match previous {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
    }
}
