use yew::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config;

/// Derived scroll flag for the navbar styling switch.
pub fn is_past_threshold(offset: i32) -> bool {
    offset > config::SCROLL_THRESHOLD_PX
}

/// Mobile navigation drawer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerState {
    Closed,
    Open,
}

impl DrawerState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Transition applied when a navigation item is picked. The drawer
    /// closes after a choice unless configured otherwise.
    pub fn on_select(self) -> Self {
        if config::CLOSE_MENU_ON_SELECT {
            Self::Closed
        } else {
            self
        }
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let drawer = use_state(|| DrawerState::Closed);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(is_past_threshold(scroll_top));
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let drawer = drawer.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            drawer.set((*drawer).toggled());
        })
    };

    let close_menu = {
        let drawer = drawer.clone();
        Callback::from(move |_: MouseEvent| {
            drawer.set((*drawer).on_select());
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 2rem 0;
                        background: transparent;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        padding: 1rem 0;
                        background: rgba(9, 9, 11, 0.9);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        text-decoration: none;
                    }
                    .nav-logo-mark {
                        background: #dc2626;
                        color: #fff;
                        font-weight: 900;
                        font-size: 1.25rem;
                        font-style: italic;
                        letter-spacing: -0.05em;
                        padding: 0.125rem 0.5rem;
                    }
                    .nav-logo-text {
                        font-weight: 700;
                        font-size: 1.25rem;
                        letter-spacing: -0.025em;
                        color: #fff;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2.5rem;
                    }
                    .nav-link {
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #a1a1aa;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .nav-cta {
                        background: #fff;
                        color: #000;
                        padding: 0.625rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .nav-cta:hover {
                        background: #e4e4e7;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                        transition: transform 0.2s ease;
                    }
                    .mobile-drawer {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        background: #09090b;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 2rem 1.5rem;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .mobile-drawer .nav-link {
                        font-size: 1.125rem;
                        font-weight: 700;
                        color: #fff;
                    }
                    .drawer-cta {
                        background: #dc2626;
                        color: #fff;
                        width: 100%;
                        padding: 1rem;
                        border: none;
                        border-radius: 0.75rem;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    @media (max-width: 768px) {
                        .nav-links { display: none; }
                        .burger-menu { display: flex; }
                        .mobile-drawer { display: flex; }
                        .nav-logo-text { display: none; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#top" class="nav-logo">
                    <span class="nav-logo-mark">{"AAV"}</span>
                    <span class="nav-logo-text">{"AGENCY"}</span>
                </a>

                <div class="nav-links">
                    { for config::NAV_SECTIONS.iter().map(|(label, anchor)| html! {
                        <a key={*label} href={*anchor} class="nav-link">{*label}</a>
                    }) }
                    <button class="nav-cta">{"Get in touch"}</button>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            {
                if (*drawer).is_open() {
                    html! {
                        <div class="mobile-drawer">
                            { for config::NAV_SECTIONS.iter().map(|(label, anchor)| html! {
                                <a key={*label} href={*anchor} class="nav-link" onclick={close_menu.clone()}>
                                    {*label}
                                </a>
                            }) }
                            <button class="drawer-cta" onclick={close_menu.clone()}>{"상담 신청하기"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_flag_flips_strictly_past_threshold() {
        assert!(!is_past_threshold(0));
        assert!(!is_past_threshold(49));
        assert!(!is_past_threshold(50));
        assert!(is_past_threshold(51));
        assert!(is_past_threshold(1000));
    }

    #[test]
    fn scroll_flag_returns_when_back_at_top() {
        assert!(is_past_threshold(600));
        assert!(!is_past_threshold(0));
    }

    #[test]
    fn drawer_toggles_between_closed_and_open() {
        let state = DrawerState::Closed;
        let state = state.toggled();
        assert_eq!(state, DrawerState::Open);
        let state = state.toggled();
        assert_eq!(state, DrawerState::Closed);
    }

    #[test]
    fn selecting_a_nav_item_always_closes_the_drawer() {
        assert_eq!(DrawerState::Open.on_select(), DrawerState::Closed);
        assert_eq!(DrawerState::Closed.on_select(), DrawerState::Closed);
    }
}
