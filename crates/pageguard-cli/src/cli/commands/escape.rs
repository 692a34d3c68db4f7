//! `pageguard escape` – print escaped text.

use pageguard_core::escape_html;

pub fn run_escape(text: &str) {
    println!("{}", escape_html(Some(text)));
}
