//! Generates the 8-bit linearization table and the man page.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;

#[allow(dead_code)]
#[path = "src/cli_args.rs"]
mod cli_args;

/// Must match `luminance::linearize`.
fn linearize(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / (1.0 + 0.055)).powf(2.4)
    }
}

fn write_tables(out_dir: &Path) -> io::Result<()> {
    let mut code = String::new();
    code.push_str("/// `linearize(i / 255)` for every byte value `i`.\n");
    code.push_str("pub const LINEARIZED_U8: [f64; 256] = [\n");
    for i in 0..=255u32 {
        let value = linearize(f64::from(i) / 255.0);
        writeln!(code, "    {value:?},").map_err(io::Error::other)?;
    }
    code.push_str("];\n");
    fs::write(out_dir.join("generated.rs"), code)
}

fn write_man_page(out_dir: &Path) -> io::Result<()> {
    let man = clap_mangen::Man::new(cli_args::Cli::command());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(out_dir.join("lumapick.1"), buffer)
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/cli_args.rs");

    let out_dir = PathBuf::from(
        env::var_os("OUT_DIR").ok_or_else(|| io::Error::other("OUT_DIR not set"))?,
    );

    write_tables(&out_dir)?;
    write_man_page(&out_dir)?;
    Ok(())
}
