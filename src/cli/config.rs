//! Config command implementation

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::Result;
use crate::models::ResolvedConfig;
use crate::output;

/// Print the settings a build would use
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    output::print(&ResolvedConfig::from(&ctx), ctx.format)
}
