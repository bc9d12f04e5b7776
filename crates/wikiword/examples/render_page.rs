//! Renders the markdown source of a wiki page from a small in-memory store and
//! prints the token stream of its current revision.
//!
//! Run with
//!
//! ```bash
//! cargo run -p wikiword --example render_page
//! ```
#![allow(missing_docs)]

use std::error::Error;

use wikiword::{MemoryStore, PageStore, Tokens, render_source};

fn main() -> Result<(), Box<dyn Error>> {
    let mut store = MemoryStore::new();
    store.add_revision(
        "FrontPage",
        b"# Welcome\n\nStart with the SandBox, then read [the guide](/guide/).\n\n![diagram][arch]\n",
    )?;
    store.add_attachment("FrontPage", "arch.svg", b"<svg/>")?;

    let text = store.current_text("FrontPage")?;
    for token in Tokens::new(&text) {
        println!("{:>10}  {:?}", token.kind().to_string(), token.as_bstr());
    }

    println!();
    let source = render_source(&store, "FrontPage")?;
    println!("{}", String::from_utf8_lossy(&source));
    Ok(())
}
