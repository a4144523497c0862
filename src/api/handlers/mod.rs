mod links;
mod ping;
mod redirect;

pub use links::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
    update_link_handler,
};
pub use ping::ping_handler;
pub use redirect::redirect_handler;
