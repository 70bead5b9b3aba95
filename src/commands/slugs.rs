//! Print post identifiers

use anyhow::Result;
use std::io::Write;

use crate::Blog;

pub fn run(blog: &Blog, out: &mut impl Write) -> Result<()> {
    for id in blog.list_identifiers()? {
        writeln!(out, "{}", id)?;
    }
    Ok(())
}
