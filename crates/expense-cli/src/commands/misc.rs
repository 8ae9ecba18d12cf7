use clap::CommandFactory;
use clap_complete::generate;

use crate::app::AppContext;
use crate::cli::{CategoriesArgs, Cli, CompletionsArgs};
use crate::output::categories_json;
use crate::ui::{header, print};

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "expense", &mut std::io::stdout());
    Ok(())
}

pub fn handle_categories(ctx: &AppContext, args: &CategoriesArgs) -> anyhow::Result<()> {
    let suggested = &ctx.config()?.categories.suggested;

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&categories_json(suggested))?);
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "categories", None));
    }
    for category in suggested {
        println!("{}", category);
    }
    Ok(())
}
