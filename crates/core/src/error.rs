use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to run `git {}`: {}", .args, .original)]
    GitSpawn {
        args: String,
        original: std::io::Error,
    },

    #[error("`git {}` exited with code {}: {}", .args, .code, .stderr)]
    GitExit {
        args: String,
        code: i32,
        stderr: String,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn git_spawn(args: &[&str], original: std::io::Error) -> Self {
        Self::GitSpawn {
            args: args.join(" "),
            original,
        }
    }

    pub fn git_exit(args: &[&str], code: i32, stderr: String) -> Self {
        Self::GitExit {
            args: args.join(" "),
            code,
            stderr,
        }
    }
}
