use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::i18n::context::use_language;

pub fn copyright_line(year: i32, tagline: &str) -> String {
    format!("© {} NextGen Automation. {}", year, tagline)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let language = use_language();
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <p>{ copyright_line(year, &language.t("footer.tagline")) }</p>
        </footer>
    }
}
