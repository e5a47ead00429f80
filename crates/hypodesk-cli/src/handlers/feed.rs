use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters;
use anyhow::{Result, bail};

/// `page` and the `expand` positions are 1-based, as printed by the view.
pub fn handle(ctx: &ExecutionContext, page: usize, expand: &[usize]) -> Result<()> {
    let mut feed = ctx.desk()?.dashboard()?.feed()?;

    for &position in expand {
        if position == 0 || position > feed.items().len() {
            bail!(
                "No feed card #{} (the feed has {} cards)",
                position,
                feed.items().len()
            );
        }
        feed.toggle_expand(position - 1);
    }
    feed.goto(page.saturating_sub(1));

    let view_model = presenters::present_feed_page(&feed);
    ctx.renderer().render(view_model)
}
