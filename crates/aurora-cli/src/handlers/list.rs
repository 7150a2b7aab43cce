use anyhow::Result;
use is_terminal::IsTerminal;

use super::HandlerContext;
use crate::presentation::presenters::build_users_list;
use crate::presentation::views::UsersListTextView;
use crate::types::OutputFormat;

pub fn handle(ctx: &HandlerContext, format: OutputFormat) -> Result<()> {
    let users = ctx.repository().list()?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&users)?);
        }
        OutputFormat::Plain => {
            let view_model = build_users_list(&users);
            let view = UsersListTextView::new(&view_model)
                .with_color(std::io::stdout().is_terminal());
            print!("{}", view);
        }
    }

    Ok(())
}
