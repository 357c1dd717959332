use crate::domain::{Element, Node, Route};
use crate::interface_adapters::presenters::ids;

/// Login link for visitors, logout button for signed-in users.
pub fn render_nav_control(authenticated: bool) -> Node {
    if authenticated {
        Element::new("button")
            .id(ids::LOGOUT_BUTTON)
            .class("logout-button")
            .attr("type", "button")
            .text("Logout")
            .into()
    } else {
        Element::new("a")
            .class("login-button")
            .attr("href", Route::Login.href())
            .text("Login")
            .into()
    }
}
