//! Implementation of the `mission-prompt template` command.

use crate::cli::TemplateArgs;
use crate::error::Result;
use crate::prompt::{STORY_TEMPLATE, placeholders};

/// Print the built-in template, or its placeholder names one per line.
pub fn cmd_template(args: TemplateArgs) -> Result<()> {
    print!("{}", template_output(&args)?);
    Ok(())
}

fn template_output(args: &TemplateArgs) -> Result<String> {
    if args.placeholders {
        let mut out = placeholders(STORY_TEMPLATE)?.join("\n");
        out.push('\n');
        Ok(out)
    } else {
        Ok(STORY_TEMPLATE.to_string())
    }
}
