use anyhow::{Result, bail};
use is_terminal::IsTerminal;

use super::HandlerContext;
use crate::app::App;
use crate::clipboard::Osc52Clipboard;
use crate::notifications::Notifications;
use crate::presentation::renderers::TuiRenderer;
use crate::router::Router;

pub fn handle(ctx: &HandlerContext, route: Option<String>) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("the interactive UI needs a terminal; use `aurora list` for plain output");
    }

    let mut app = App::new(
        ctx.repository(),
        Router::new(route.as_deref()),
        Box::new(Osc52Clipboard::stdout()),
        Notifications::new(ctx.config.notification_ttl(), ctx.config.notification_fade()),
    );

    let mut renderer = TuiRenderer::new()?;
    renderer.run(&mut app)
}
