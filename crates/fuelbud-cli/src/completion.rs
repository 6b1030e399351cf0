//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Generate a completion script for the `fuelbud` binary.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    generate(shell, cmd, "fuelbud", out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_bash_completion() {
        let mut cmd = Command::new("fuelbud").subcommand(Command::new("predict"));
        let mut buf = Vec::new();
        generate_completion(&mut cmd, Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("fuelbud"));
        assert!(script.contains("predict"));
    }

    #[test]
    fn generate_zsh_completion() {
        let mut cmd = Command::new("fuelbud");
        let mut buf = Vec::new();
        generate_completion(&mut cmd, Shell::Zsh, &mut buf);
        assert!(!buf.is_empty());
    }
}
