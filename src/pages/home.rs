use log::warn;
use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::hero::Hero;
use crate::components::spacer::BeyondTheFold;
use crate::config;
use crate::motion::dom::{self, BindError};

/// Points `<meta name="description">` at `content`, creating the tag if the
/// document shell does not have one.
fn set_meta_description(content: &str) -> Result<(), BindError> {
    let document = dom::window()?.document().ok_or(BindError::MissingTarget("document"))?;
    let meta = match document.query_selector("meta[name=\"description\"]")? {
        Some(meta) => meta,
        None => {
            let meta = document.create_element("meta")?;
            meta.set_attribute("name", "description")?;
            let head = document.head().ok_or(BindError::MissingTarget("<head>"))?;
            head.append_child(&meta)?;
            meta
        }
    };
    meta.set_attribute("content", content)?;
    Ok(())
}

#[function_component]
pub fn Home() -> Html {
    use_title(config::PAGE_TITLE.to_string());

    use_effect_with_deps(
        move |_| {
            if let Err(e) = set_meta_description(config::PAGE_DESCRIPTION) {
                warn!("Could not set page description: {}", e);
            }
            || ()
        },
        (),
    );

    html! {
        <main>
            <Hero />
            <BeyondTheFold />
        </main>
    }
}
