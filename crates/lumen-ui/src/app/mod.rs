use crate::components::button::Button;
use crate::components::sidebar::Sidebar;
use crate::components::toggle_button::ToggleButton;
use crate::components::toolbar::Toolbar;
use yew::prelude::*;

pub(crate) mod preferences;

#[function_component(LumenApp)]
pub(crate) fn lumen_app() -> Html {
    let compact = use_state(|| false);
    let (width, height): (u32, u32) = if *compact { (96, 28) } else { (160, 40) };
    let resize = {
        let compact = compact.clone();
        Callback::from(move |_| compact.set(!*compact))
    };

    html! {
        <div class="app-shell">
            <Toolbar />
            <Sidebar />
            <main class="demo">
                <Button text="Resize" width={width} height={height} onclick={resize} />
                <ToggleButton checked_label="Hello" unchecked_label="Bye" />
                <ToggleButton checked_label="123" unchecked_label="321" />
            </main>
        </div>
    }
}

/// Mount the application shell into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<LumenApp>::with_root(root).render();
    } else {
        yew::Renderer::<LumenApp>::new().render();
    }
}
