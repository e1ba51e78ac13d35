//! Invoking OS user lookup, used when a host block has no `User`.

use std::env;

/// Name of the user running the process, or an empty string when it cannot be determined.
pub fn current_username() -> String {
    #[cfg(unix)]
    {
        if let Ok(Some(user)) = nix::unistd::User::from_uid(nix::unistd::Uid::current()) {
            return user.name;
        }
    }

    env::var("USER").or_else(|_| env::var("USERNAME")).unwrap_or_default()
}
