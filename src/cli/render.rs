//! `blogconf render`: print reference HTML.

use anyhow::Result;

use crate::config::BlogConfig;
use crate::render::{Fragment, render};

pub fn render_fragment(config: &BlogConfig, fragment: Fragment) -> Result<()> {
    print!("{}", render(config, fragment));
    Ok(())
}
