//! Developer tasks: man page and shell completion generation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "recase developer tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Write the man page for every command into DIR
    Man {
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Write shell completion scripts into DIR
    Completions {
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => man(&out),
        Task::Completions { out } => completions(&out),
    }
}

fn man(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    clap_mangen::generate_to(recase::command(), out)?;
    println!("man pages written to {}", out.display());
    Ok(())
}

fn completions(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let mut cmd = recase::command();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        let path = clap_complete::generate_to(shell, &mut cmd, "recase", out)?;
        println!("{shell} completions written to {}", path.display());
    }
    Ok(())
}
