use key_deck::dispatch::{self, Dispatcher};
use key_deck::display::DisplayConnection;
use key_deck::inject::XKeyInjector;
use key_deck::logging;
use key_deck::overlay::Overlay;
use key_deck::registry;
use key_deck::target::resolve_target;

const PANEL_TITLE: &str = "Key Deck";

fn main() -> anyhow::Result<()> {
    logging::init();

    let registry = registry::default_layout()?;
    let conn = DisplayConnection::open()?;
    let (overlay, regions) = Overlay::create(&conn, &registry, PANEL_TITLE)?;
    let target = resolve_target(&conn)?;

    let injector = XKeyInjector::new(&conn);
    let mut dispatcher = Dispatcher::new(regions, overlay.close_protocol(), target, injector);
    dispatch::run(&conn, &overlay, &mut dispatcher);

    Ok(())
}
